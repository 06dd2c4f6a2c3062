//! Simulator pages.

mod debug;

pub use debug::draw_debug_page;

/// Page shown in the simulator window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// The watch face itself.
    #[default]
    Face,
    /// Face state and the debug log.
    Debug,
}

impl Page {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Debug,
            Self::Debug => Self::Face,
        }
    }
}
