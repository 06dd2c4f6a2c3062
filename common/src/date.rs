//! Date label placement.
//!
//! The date is shown in one of three slots (right, left, bottom), picked so the
//! label sits where the hands currently are not. The minute ranges track where
//! the minute hand sweeps; the hour conditions keep the hour hand out of the
//! chosen slot.
//!
//! | Slot   | Chosen when                                              | Format     |
//! |--------|----------------------------------------------------------|------------|
//! | Right  | `(m < 7 or m > 23) and (h < 1 or h >= 5)`                | `Wed\n15`  |
//! | Left   | otherwise, `(m < 37 or m > 53) and (h < 7 or h > 11)`    | `Wed\n15`  |
//! | Bottom | otherwise                                                | `Wed 15`   |
//!
//! `h` is the hour folded by [`twelve_hour`], which keeps 12 at noon and 0 at
//! midnight.

use core::fmt::Write;

use heapless::String;

use crate::time::{CalendarDate, ClockTime, WallClock};

/// Capacity of a formatted date label.
pub const DATE_LABEL_LEN: usize = 16;

/// A formatted date label.
pub type DateLabel = String<DATE_LABEL_LEN>;

/// Where the date label is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateSlot {
    Right,
    Left,
    Bottom,
}

impl DateSlot {
    pub const ALL: [Self; 3] = [Self::Right, Self::Left, Self::Bottom];

    /// Separator between weekday and day of month.
    pub const fn separator(self) -> char {
        match self {
            Self::Right | Self::Left => '\n',
            Self::Bottom => ' ',
        }
    }
}

/// Fold a 24-hour value for the placement rule.
///
/// Only hours from 13 on are shifted, so noon stays 12 while midnight is 0.
#[inline]
pub const fn twelve_hour(hour: u8) -> u8 { if hour < 13 { hour } else { hour - 12 } }

/// Pick the slot for a time of day.
pub const fn select_slot(time: ClockTime) -> DateSlot {
    let minute = time.minute();
    let hour = twelve_hour(time.hour());

    if (minute < 7 || minute > 23) && (hour < 1 || hour >= 5) {
        DateSlot::Right
    } else if (minute < 37 || minute > 53) && (hour < 7 || hour > 11) {
        DateSlot::Left
    } else {
        DateSlot::Bottom
    }
}

/// Format a date for a slot: abbreviated weekday, separator, zero-padded day.
pub fn format_label(
    date: CalendarDate,
    slot: DateSlot,
) -> DateLabel {
    let mut label = DateLabel::new();
    // Fits: 3 + 1 + 2 characters
    let _ = write!(label, "{}{}{:02}", date.weekday.abbrev(), slot.separator(), date.day);
    label
}

/// Text of the three date slots. At most one is non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateSlots {
    right: DateLabel,
    left: DateLabel,
    bottom: DateLabel,
}

impl DateSlots {
    pub const fn new() -> Self {
        Self {
            right: DateLabel::new(),
            left: DateLabel::new(),
            bottom: DateLabel::new(),
        }
    }

    /// Place the date for `clock` and clear the other two slots.
    ///
    /// Returns the slot that now holds the label.
    pub fn update(
        &mut self,
        clock: WallClock,
    ) -> DateSlot {
        let slot = select_slot(clock.time);
        let label = format_label(clock.date, slot);

        self.right.clear();
        self.left.clear();
        self.bottom.clear();
        *self.slot_mut(slot) = label;

        slot
    }

    /// Text of one slot (empty when not selected).
    pub fn text(
        &self,
        slot: DateSlot,
    ) -> &str {
        match slot {
            DateSlot::Right => self.right.as_str(),
            DateSlot::Left => self.left.as_str(),
            DateSlot::Bottom => self.bottom.as_str(),
        }
    }

    /// The populated slot and its text, if any.
    pub fn active(&self) -> Option<(DateSlot, &str)> {
        DateSlot::ALL
            .into_iter()
            .map(|slot| (slot, self.text(slot)))
            .find(|(_, text)| !text.is_empty())
    }

    /// Number of slots holding text.
    pub fn populated_count(&self) -> usize { DateSlot::ALL.iter().filter(|slot| !self.text(**slot).is_empty()).count() }

    fn slot_mut(
        &mut self,
        slot: DateSlot,
    ) -> &mut DateLabel {
        match slot {
            DateSlot::Right => &mut self.right,
            DateSlot::Left => &mut self.left,
            DateSlot::Bottom => &mut self.bottom,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
