//! Popup state management with time-based expiration.
//!
//! Each popup variant holds its start time for expiration checking.

use std::time::Instant;

use crate::timing::POPUP_DURATION;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// The face asked for a vibration; there is no motor, so show it.
    Vibe(Instant),
    /// A palette was applied; holds its name.
    Palette(Instant, &'static str),
    /// Vibrate-on-disconnect was toggled.
    VibrateSetting(Instant, bool),
    /// The simulated phone link changed.
    Link(Instant, bool),
    /// Fast-forward toggled.
    FastForward(Instant, bool),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Vibe(t)
            | Self::Palette(t, _)
            | Self::VibrateSetting(t, _)
            | Self::Link(t, _)
            | Self::FastForward(t, _) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Text shown in the popup box.
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Vibe(_) => "BUZZ BUZZ",
            Self::Palette(_, name) => *name,
            Self::VibrateSetting(_, true) => "VIBE ON",
            Self::VibrateSetting(_, false) => "VIBE OFF",
            Self::Link(_, true) => "CONNECTED",
            Self::Link(_, false) => "DISCONNECTED",
            Self::FastForward(_, true) => "FAST >>",
            Self::FastForward(_, false) => "REAL TIME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_popup_not_expired() {
        let popup = Popup::Vibe(Instant::now());
        assert!(!popup.is_expired());
        assert_eq!(popup.text(), "BUZZ BUZZ");
    }

    #[test]
    fn test_old_popup_expired() {
        let Some(start) = Instant::now().checked_sub(POPUP_DURATION * 2) else {
            return;
        };
        assert!(Popup::Link(start, false).is_expired());
    }

    #[test]
    fn test_texts() {
        let now = Instant::now();
        assert_eq!(Popup::Palette(now, "OCEAN").text(), "OCEAN");
        assert_eq!(Popup::VibrateSetting(now, false).text(), "VIBE OFF");
        assert_eq!(Popup::Link(now, true).text(), "CONNECTED");
    }
}
