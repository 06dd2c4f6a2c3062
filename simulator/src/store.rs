//! File-backed settings store.
//!
//! The whole key -> value map is rewritten on every write, postcard encoded.
//! A missing, truncated or foreign file reads as an empty store so the face
//! starts on its defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use formal_common::storage::{SettingKey, SettingsStore, StorageError};
use serde::{Deserialize, Serialize};

/// Settings file used when `FORMAL_SETTINGS` is not set.
pub const DEFAULT_SETTINGS_PATH: &str = "formal-settings.bin";

/// Environment variable overriding the settings file path.
pub const SETTINGS_PATH_VAR: &str = "FORMAL_SETTINGS";

/// File format version; other versions are ignored on load.
const FORMAT_VERSION: u8 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    version: u8,
    entries: Vec<(u32, i32)>,
}

/// Settings store persisted to a single file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<u32, i32>,
    loaded: bool,
}

impl FileStore {
    /// Open the store at `path`, reading whatever valid settings it holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let decoded = fs::read(&path)
            .ok()
            .and_then(|bytes| postcard::from_bytes::<SettingsFile>(&bytes).ok())
            .filter(|file| file.version == FORMAT_VERSION);

        let loaded = decoded.is_some();
        let values = decoded.map(|file| file.entries.into_iter().collect()).unwrap_or_default();

        Self { path, values, loaded }
    }

    /// Open the store named by `FORMAL_SETTINGS`, or the default file.
    pub fn from_env() -> Self {
        let path = std::env::var_os(SETTINGS_PATH_VAR).map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH), PathBuf::from);
        Self::open(path)
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Check if settings were read from disk at open.
    pub const fn loaded(&self) -> bool { self.loaded }

    fn save(&self) -> Result<(), StorageError> {
        let file = SettingsFile {
            version: FORMAT_VERSION,
            entries: self.values.iter().map(|(k, v)| (*k, *v)).collect(),
        };
        let bytes = postcard::to_allocvec(&file).map_err(|_| StorageError::Io)?;
        fs::write(&self.path, bytes).map_err(|_| StorageError::Io)
    }
}

impl SettingsStore for FileStore {
    fn read(
        &self,
        key: SettingKey,
    ) -> Option<i32> {
        self.values.get(&key.id()).copied()
    }

    fn write(
        &mut self,
        key: SettingKey,
        value: i32,
    ) -> Result<(), StorageError> {
        self.values.insert(key.id(), value);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("formal-{}-{name}.bin", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = FileStore::open(temp_path("missing"));
        assert!(!store.loaded());
        assert_eq!(store.read(SettingKey::BackgroundColor), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        let mut store = FileStore::open(&path);
        store.write(SettingKey::TickColor, 0xFF_AA00).unwrap();
        store.write_bool(SettingKey::VibrateOnDisconnect, false).unwrap();

        let reopened = FileStore::open(&path);
        assert!(reopened.loaded());
        assert_eq!(reopened.read(SettingKey::TickColor), Some(0xFF_AA00));
        assert_eq!(reopened.read_bool(SettingKey::VibrateOnDisconnect), Some(false));
        assert!(!reopened.exists(SettingKey::HourColor));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_garbage_file_reads_as_empty() {
        let path = temp_path("garbage");
        fs::write(&path, [0xFF, 0xFF, 0xFF]).unwrap();

        let store = FileStore::open(&path);
        assert!(!store.loaded());
        assert_eq!(store.read(SettingKey::DateColor), None);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_unwritable_path_reports_io() {
        let mut store = FileStore::open(std::env::temp_dir().join("formal-no-such-dir").join("settings.bin"));
        assert_eq!(store.write(SettingKey::DotColor, 1), Err(StorageError::Io));
        // in-memory value is still readable
        assert_eq!(store.read(SettingKey::DotColor), Some(1));
    }
}
