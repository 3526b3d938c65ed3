/// Round-robin highlight over the service cards while their section is in
/// view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    running: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            running: false,
        }
    }

    /// Start from the current index. `None` when already running or empty.
    pub fn start(&mut self) -> Option<usize> {
        if self.running || self.len == 0 {
            return None;
        }
        self.running = true;
        Some(self.index)
    }

    /// Next card to highlight, wrapping around.
    pub fn advance(&mut self) -> Option<usize> {
        if !self.running || self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.index = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
