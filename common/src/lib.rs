//! Core of the Formal analog watch face.
//!
//! This crate contains everything the face does, independent of the runtime
//! that hosts it:
//!
//! - [`colors`]: 24-bit watch colors and their RGB565 conversion
//! - [`config`]: Layout constants and display platform presets
//! - [`time`]: Clock time, calendar date and the host time source trait
//! - [`geometry`]: Hand and tick placement on the dial
//! - [`widgets`]: Tick, hand, date label and popup drawing
//! - [`styles`]: Date label font and text style
//! - [`date`]: Date label slot selection
//! - [`settings`]: Persisted color/vibration configuration
//! - [`storage`]: Settings store trait and an in-memory store
//! - [`message`]: Configuration message decoding
//! - [`face`]: Event dispatcher owning the face state
//! - [`debug_log`]: Fixed-size debug log ring buffer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and allocation-free. Tests run on the host with
//! `std` enabled via `cfg_attr`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod date;
pub mod debug_log;
pub mod face;
pub mod geometry;
pub mod message;
pub mod settings;
pub mod storage;
pub mod styles;
pub mod time;
pub mod widgets;

// Re-export commonly used items
pub use colors::WatchColor;
pub use config::Platform;
pub use face::{Effects, Event, WatchFace};
pub use time::{ClockTime, TimeSource, WallClock};
