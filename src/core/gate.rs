/// Run state of a self-rescheduling animation loop tied to page visibility.
///
/// The loop only ever has one frame in flight: `resume` asks for a new frame
/// only when the previous one was dropped by `pause`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    paused: bool,
    scheduled: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call before requesting the very first frame.
    pub fn start(&mut self) -> bool {
        if self.paused || self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called at the top of a frame callback. Returns whether the frame should
    /// draw and request its successor.
    pub fn on_frame(&mut self) -> bool {
        self.scheduled = false;
        if self.paused {
            return false;
        }
        self.scheduled = true;
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Returns true when the caller must request a frame to restart the loop.
    pub fn resume(&mut self) -> bool {
        self.paused = false;
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
