//! Frame and popup timing for the simulator loop.
//!
//! `std::time::Duration` is not available in the `no_std` core, so these
//! live on the host side.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long a status popup stays on the face.
pub const POPUP_DURATION: Duration = Duration::from_millis(1500);

/// How often the local clock is polled for a minute change.
pub const CLOCK_POLL: Duration = Duration::from_millis(250);
