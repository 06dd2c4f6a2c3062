//! Host wall clock.
//!
//! Reads local time from `chrono` and adds a minute offset so the face can be
//! fast-forwarded without touching the system clock.

use chrono::{Datelike, Local, TimeDelta, Timelike};
use formal_common::time::{CalendarDate, ClockTime, TimeSource, WallClock, Weekday};

/// Convert a chrono date-time to the face's wall clock reading.
pub fn wall_clock<T: Datelike + Timelike>(now: &T) -> WallClock {
    let time = ClockTime::new(now.hour() as u8, now.minute() as u8).unwrap_or(ClockTime::MIDNIGHT);
    let date = CalendarDate {
        weekday: Weekday::from_monday_index(now.weekday().num_days_from_monday() as u8),
        day: now.day() as u8,
    };
    WallClock::new(time, date)
}

/// Local time shifted by a number of simulated minutes.
#[derive(Debug, Default)]
pub struct SimClock {
    offset_minutes: i64,
}

impl SimClock {
    pub const fn new() -> Self { Self { offset_minutes: 0 } }

    /// Move the clock one minute ahead.
    pub fn advance_minute(&mut self) { self.offset_minutes += 1; }

    /// Drop the offset and follow local time again.
    pub fn reset(&mut self) { self.offset_minutes = 0; }

    pub const fn offset_minutes(&self) -> i64 { self.offset_minutes }
}

impl TimeSource for SimClock {
    fn now(&self) -> WallClock { wall_clock(&(Local::now() + TimeDelta::minutes(self.offset_minutes))) }
}
