/// `document.readyState` as seen by start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unknown values count as `Interactive`: the DOM is usable but `load`
    /// may still be pending.
    pub fn parse(state: &str) -> Self {
        match state {
            "loading" => Self::Loading,
            "complete" => Self::Complete,
            _ => Self::Interactive,
        }
    }

    /// Init must wait for `DOMContentLoaded`.
    #[inline]
    pub fn awaits_dom(self) -> bool {
        self == Self::Loading
    }

    /// `load` has already fired.
    #[inline]
    pub fn is_loaded(self) -> bool {
        self == Self::Complete
    }
}
