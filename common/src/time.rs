//! Clock time, calendar date and the host time source.
//!
//! The face never reads a clock itself. The host implements [`TimeSource`] and
//! the face asks it for a [`WallClock`] at startup; minute ticks carry their own
//! [`WallClock`].

/// Time of day with minute resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a time of day. Returns `None` unless `hour < 24` and `minute < 60`.
    pub const fn new(
        hour: u8,
        minute: u8,
    ) -> Option<Self> {
        if hour < 24 && minute < 60 { Some(Self { hour, minute }) } else { None }
    }

    /// Hour in 24-hour form (0-23).
    #[inline]
    pub const fn hour(self) -> u8 { self.hour }

    /// Minute (0-59).
    #[inline]
    pub const fn minute(self) -> u8 { self.minute }
}

/// Day of the week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// English three-letter abbreviation (`%a`).
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Day from its index counted from Monday (0-6). Wraps for larger values.
    pub const fn from_monday_index(index: u8) -> Self { Self::ALL[(index % 7) as usize] }
}

/// The date fields the face displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarDate {
    pub weekday: Weekday,
    /// Day of month (1-31).
    pub day: u8,
}

impl Default for CalendarDate {
    fn default() -> Self { Self { weekday: Weekday::Monday, day: 1 } }
}

/// Wall-clock reading delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    pub time: ClockTime,
    pub date: CalendarDate,
}

impl WallClock {
    pub const fn new(
        time: ClockTime,
        date: CalendarDate,
    ) -> Self {
        Self { time, date }
    }
}

/// Host-provided wall clock.
pub trait TimeSource {
    /// Current local time and date.
    fn now(&self) -> WallClock;
}

// =============================================================================
// Tests
// =============================================================================
