//! Color and vibration configuration.
//!
//! [`ColorConfig`] is loaded once from the settings store at startup and then
//! changed one field at a time by configuration messages. Every change is
//! written back to the store immediately and reports which parts of the face
//! need redrawing as a [`Dirty`] set.
//!
//! | Field        | Redraw                                   |
//! |--------------|------------------------------------------|
//! | background   | window background, background layer, hands |
//! | tick         | background layer                         |
//! | hour/minute/dot | hands                                 |
//! | date         | date text color                          |
//! | vibrate flag | nothing                                  |

use crate::colors::{BLACK, LIGHT_GRAY, WHITE, WatchColor};
use crate::message::Setting;
use crate::storage::{SettingKey, SettingsStore, StorageError};

/// Regions the host must redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dirty {
    /// Window background color changed.
    pub window: bool,
    /// Background layer (ticks and interior).
    pub background: bool,
    /// Hands layer (hands and center cap).
    pub hands: bool,
    /// Date text content changed.
    pub date_text: bool,
    /// Date text color changed.
    pub date_color: bool,
}

impl Dirty {
    /// Nothing to redraw.
    pub const NONE: Self = Self {
        window: false,
        background: false,
        hands: false,
        date_text: false,
        date_color: false,
    };

    /// Redraw everything (first frame).
    pub const ALL: Self = Self {
        window: true,
        background: true,
        hands: true,
        date_text: true,
        date_color: true,
    };

    /// Redraw set for a change of one setting.
    pub const fn for_key(key: SettingKey) -> Self {
        match key {
            SettingKey::BackgroundColor => Self { window: true, background: true, hands: true, ..Self::NONE },
            SettingKey::TickColor => Self { background: true, ..Self::NONE },
            SettingKey::HourColor | SettingKey::MinuteColor | SettingKey::DotColor => Self { hands: true, ..Self::NONE },
            SettingKey::DateColor => Self { date_color: true, ..Self::NONE },
            SettingKey::VibrateOnDisconnect => Self::NONE,
        }
    }

    /// Union of two redraw sets.
    #[must_use]
    pub const fn union(
        self,
        other: Self,
    ) -> Self {
        Self {
            window: self.window || other.window,
            background: self.background || other.background,
            hands: self.hands || other.hands,
            date_text: self.date_text || other.date_text,
            date_color: self.date_color || other.date_color,
        }
    }

    /// Check if anything needs redrawing.
    #[inline]
    pub const fn any(self) -> bool {
        self.window || self.background || self.hands || self.date_text || self.date_color
    }
}

/// Current colors and vibration preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorConfig {
    pub background: WatchColor,
    pub tick: WatchColor,
    pub hour: WatchColor,
    pub minute: WatchColor,
    pub dot: WatchColor,
    pub date: WatchColor,
    pub vibrate_on_disconnect: bool,
}

impl ColorConfig {
    /// Factory defaults: black background, light gray ticks, everything else white.
    pub const DEFAULT: Self = Self {
        background: BLACK,
        tick: LIGHT_GRAY,
        hour: WHITE,
        minute: WHITE,
        dot: WHITE,
        date: WHITE,
        vibrate_on_disconnect: true,
    };

    /// Load from the store, using the default for every absent key.
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let color = |key, default: WatchColor| store.read(key).map_or(default, WatchColor::from_raw);
        let defaults = Self::DEFAULT;

        Self {
            background: color(SettingKey::BackgroundColor, defaults.background),
            tick: color(SettingKey::TickColor, defaults.tick),
            hour: color(SettingKey::HourColor, defaults.hour),
            minute: color(SettingKey::MinuteColor, defaults.minute),
            dot: color(SettingKey::DotColor, defaults.dot),
            date: color(SettingKey::DateColor, defaults.date),
            vibrate_on_disconnect: store
                .read_bool(SettingKey::VibrateOnDisconnect)
                .unwrap_or(defaults.vibrate_on_disconnect),
        }
    }

    /// Update one field in memory and return what needs redrawing.
    pub fn set(
        &mut self,
        setting: Setting,
    ) -> Dirty {
        match setting {
            Setting::BackgroundColor(c) => self.background = c,
            Setting::TickColor(c) => self.tick = c,
            Setting::HourColor(c) => self.hour = c,
            Setting::MinuteColor(c) => self.minute = c,
            Setting::DotColor(c) => self.dot = c,
            Setting::DateColor(c) => self.date = c,
            Setting::VibrateOnDisconnect(on) => self.vibrate_on_disconnect = on,
        }
        Dirty::for_key(setting.key())
    }

    /// Persist one field, then update it in memory.
    ///
    /// Colors are stored as their 24-bit value, so high bits of the received
    /// int32 are not kept.
    ///
    /// The in-memory value changes even when the write fails, so the face
    /// shows what the user picked; the error is returned for logging.
    pub fn apply<S: SettingsStore + ?Sized>(
        &mut self,
        setting: Setting,
        store: &mut S,
    ) -> (Dirty, Result<(), StorageError>) {
        let written = store.write(setting.key(), setting.raw());
        (self.set(setting), written)
    }

    /// Current value of a field as a [`Setting`].
    pub const fn get(
        &self,
        key: SettingKey,
    ) -> Setting {
        match key {
            SettingKey::BackgroundColor => Setting::BackgroundColor(self.background),
            SettingKey::TickColor => Setting::TickColor(self.tick),
            SettingKey::HourColor => Setting::HourColor(self.hour),
            SettingKey::MinuteColor => Setting::MinuteColor(self.minute),
            SettingKey::DotColor => Setting::DotColor(self.dot),
            SettingKey::DateColor => Setting::DateColor(self.date),
            SettingKey::VibrateOnDisconnect => Setting::VibrateOnDisconnect(self.vibrate_on_disconnect),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Tests
// =============================================================================
