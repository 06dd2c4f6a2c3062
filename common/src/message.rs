//! Configuration messages.
//!
//! The host transport delivers a configuration update as a list of
//! `(key, int32)` tuples. Any subset of the seven fields may be present;
//! unknown keys are skipped.

use crate::colors::{WatchColor, parse_hex};
use crate::storage::SettingKey;

/// One decoded setting change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    BackgroundColor(WatchColor),
    TickColor(WatchColor),
    HourColor(WatchColor),
    MinuteColor(WatchColor),
    DotColor(WatchColor),
    DateColor(WatchColor),
    VibrateOnDisconnect(bool),
}

impl Setting {
    /// Decode a raw tuple value for a key.
    ///
    /// The vibrate flag is an int8 on the wire; only the low byte is read.
    pub const fn from_raw(
        key: SettingKey,
        raw: i32,
    ) -> Self {
        match key {
            SettingKey::BackgroundColor => Self::BackgroundColor(WatchColor::from_raw(raw)),
            SettingKey::TickColor => Self::TickColor(WatchColor::from_raw(raw)),
            SettingKey::HourColor => Self::HourColor(WatchColor::from_raw(raw)),
            SettingKey::MinuteColor => Self::MinuteColor(WatchColor::from_raw(raw)),
            SettingKey::DotColor => Self::DotColor(WatchColor::from_raw(raw)),
            SettingKey::DateColor => Self::DateColor(WatchColor::from_raw(raw)),
            SettingKey::VibrateOnDisconnect => Self::VibrateOnDisconnect(raw as i8 != 0),
        }
    }

    /// Key this setting is stored under.
    pub const fn key(self) -> SettingKey {
        match self {
            Self::BackgroundColor(_) => SettingKey::BackgroundColor,
            Self::TickColor(_) => SettingKey::TickColor,
            Self::HourColor(_) => SettingKey::HourColor,
            Self::MinuteColor(_) => SettingKey::MinuteColor,
            Self::DotColor(_) => SettingKey::DotColor,
            Self::DateColor(_) => SettingKey::DateColor,
            Self::VibrateOnDisconnect(_) => SettingKey::VibrateOnDisconnect,
        }
    }

    /// Value as persisted: the color's `0xRRGGBB`, or 0/1 for the flag.
    pub const fn raw(self) -> i32 {
        match self {
            Self::BackgroundColor(c)
            | Self::TickColor(c)
            | Self::HourColor(c)
            | Self::MinuteColor(c)
            | Self::DotColor(c)
            | Self::DateColor(c) => c.raw(),
            Self::VibrateOnDisconnect(on) => on as i32,
        }
    }
}

/// A raw `(key, value)` pair as delivered by the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple {
    pub key: u32,
    pub value: i32,
}

impl Tuple {
    pub const fn new(
        key: u32,
        value: i32,
    ) -> Self {
        Self { key, value }
    }
}

/// A configuration update: one optional slot per setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigMessage {
    fields: [Option<Setting>; SettingKey::ALL.len()],
}

impl ConfigMessage {
    pub const fn new() -> Self { Self { fields: [None; SettingKey::ALL.len()] } }

    /// Decode tuples. Unknown keys are ignored; a repeated key keeps the last value.
    pub fn from_tuples<'a, I>(tuples: I) -> Self
    where
        I: IntoIterator<Item = &'a Tuple>,
    {
        let mut message = Self::new();
        for tuple in tuples {
            if let Some(key) = SettingKey::from_id(tuple.key) {
                message.set(Setting::from_raw(key, tuple.value));
            }
        }
        message
    }

    /// Build a message from companion settings given as strings.
    ///
    /// Colors are hex strings (`"FF0000"`, `"#ff0000"`, `"0xFF0000"`); the
    /// vibrate flag accepts `true`/`false`/`1`/`0`. Values that do not parse
    /// are left out of the message.
    pub fn from_hex_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (SettingKey, &'a str)>,
    {
        let mut message = Self::new();
        for (key, text) in fields {
            let setting = match key {
                SettingKey::VibrateOnDisconnect => parse_flag(text).map(Setting::VibrateOnDisconnect),
                _ => parse_hex(text).map(|color| Setting::from_raw(key, color.raw())),
            };
            if let Some(setting) = setting {
                message.set(setting);
            }
        }
        message
    }

    /// Add or replace one field.
    pub fn set(
        &mut self,
        setting: Setting,
    ) {
        self.fields[setting.key() as usize] = Some(setting);
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(
        mut self,
        setting: Setting,
    ) -> Self {
        self.set(setting);
        self
    }

    /// The field for a key, if present.
    pub fn get(
        &self,
        key: SettingKey,
    ) -> Option<Setting> {
        self.fields[key as usize]
    }

    /// Present fields in key order.
    pub fn settings(&self) -> impl Iterator<Item = Setting> + '_ { self.fields.iter().flatten().copied() }

    /// Check if no field is present.
    pub fn is_empty(&self) -> bool { self.fields.iter().all(Option::is_none) }
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.trim() {
        "1" | "true" | "TRUE" | "True" => Some(true),
        "0" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
