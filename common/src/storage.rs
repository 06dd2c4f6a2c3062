//! Persistent settings storage.
//!
//! The host owns the actual store; the face talks to it through
//! [`SettingsStore`], a key -> `i32` map. Keys are the same small integers the
//! configuration messages use (see [`SettingKey`]).

use heapless::LinearMap;

/// Stable keys for persisted settings and configuration message fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SettingKey {
    BackgroundColor = 0,
    TickColor = 1,
    HourColor = 2,
    MinuteColor = 3,
    DotColor = 4,
    DateColor = 5,
    /// Vibrate on disconnect, stored as 0/1.
    VibrateOnDisconnect = 6,
}

impl SettingKey {
    /// All keys in ascending order.
    pub const ALL: [Self; 7] = [
        Self::BackgroundColor,
        Self::TickColor,
        Self::HourColor,
        Self::MinuteColor,
        Self::DotColor,
        Self::DateColor,
        Self::VibrateOnDisconnect,
    ];

    /// The key as sent on the wire and used in the store.
    #[inline]
    pub const fn id(self) -> u32 { self as u32 }

    /// Look up a key by id. Unknown ids yield `None`.
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::BackgroundColor),
            1 => Some(Self::TickColor),
            2 => Some(Self::HourColor),
            3 => Some(Self::MinuteColor),
            4 => Some(Self::DotColor),
            5 => Some(Self::DateColor),
            6 => Some(Self::VibrateOnDisconnect),
            _ => None,
        }
    }

    /// Short name for log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BackgroundColor => "background",
            Self::TickColor => "tick",
            Self::HourColor => "hour",
            Self::MinuteColor => "minute",
            Self::DotColor => "dot",
            Self::DateColor => "date",
            Self::VibrateOnDisconnect => "vibrate",
        }
    }
}

/// Errors from settings store writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// No room left for a new key.
    Full,
    /// The backing medium failed.
    Io,
}

impl core::fmt::Display for StorageError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Full => f.write_str("store full"),
            Self::Io => f.write_str("store i/o error"),
        }
    }
}

/// Key -> `i32` persistent store provided by the host.
///
/// A missing key is not an error; callers fall back to defaults.
pub trait SettingsStore {
    /// Check if a key has been written.
    fn exists(
        &self,
        key: SettingKey,
    ) -> bool {
        self.read(key).is_some()
    }

    /// Read a value, `None` when absent.
    fn read(
        &self,
        key: SettingKey,
    ) -> Option<i32>;

    /// Write a value, replacing any previous one.
    fn write(
        &mut self,
        key: SettingKey,
        value: i32,
    ) -> Result<(), StorageError>;

    /// Read a flag stored as 0/1. Any non-zero value is `true`.
    fn read_bool(
        &self,
        key: SettingKey,
    ) -> Option<bool> {
        self.read(key).map(|value| value != 0)
    }

    /// Write a flag as 0/1.
    fn write_bool(
        &mut self,
        key: SettingKey,
        value: bool,
    ) -> Result<(), StorageError> {
        self.write(key, i32::from(value))
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for &mut T {
    fn exists(
        &self,
        key: SettingKey,
    ) -> bool {
        (**self).exists(key)
    }

    fn read(
        &self,
        key: SettingKey,
    ) -> Option<i32> {
        (**self).read(key)
    }

    fn write(
        &mut self,
        key: SettingKey,
        value: i32,
    ) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Number of slots in [`MemoryStore`]: one per [`SettingKey`].
pub const MEMORY_STORE_CAPACITY: usize = SettingKey::ALL.len();

/// Fixed-capacity in-memory store.
///
/// Used by tests and by hosts that keep settings in RAM.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: LinearMap<SettingKey, i32, MEMORY_STORE_CAPACITY>,
}

impl MemoryStore {
    pub const fn new() -> Self { Self { values: LinearMap::new() } }

    /// Number of stored keys.
    #[inline]
    pub fn len(&self) -> usize { self.values.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl SettingsStore for MemoryStore {
    fn read(
        &self,
        key: SettingKey,
    ) -> Option<i32> {
        self.values.get(&key).copied()
    }

    fn write(
        &mut self,
        key: SettingKey,
        value: i32,
    ) -> Result<(), StorageError> {
        self.values.insert(key, value).map(|_| ()).map_err(|_| StorageError::Full)
    }
}

// =============================================================================
// Tests
// =============================================================================
