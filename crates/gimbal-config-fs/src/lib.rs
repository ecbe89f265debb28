// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for Gimbal hosts.
//!
//! Each key is stored as `<key>.json` under a base directory, by default the
//! platform config dir (e.g. `~/.config/Gimbal`). Keys are restricted to
//! ASCII letters, digits, `-` and `_`, so a key can never name a path outside
//! the base directory. Saves go through a sibling temp file and a rename, so
//! a crash mid-write leaves either the old blob or the new one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use gimbal_app_core::config::{ConfigError, ConfigStore};
use tracing::debug;

const EXTENSION: &str = "json";

/// Stores configs as JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "config key {key:?} must be non-empty ASCII letters, digits, '-' or '_'"
        )))
    }
}

impl FsConfigStore {
    /// Store rooted at the user config directory, created if missing.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("dev", "gimbal", "Gimbal")
            .ok_or_else(|| ConfigError::Other("no home directory to resolve the config dir".into()))?;
        let store = Self::at(dirs.config_dir());
        fs::create_dir_all(&store.base)?;
        Ok(store)
    }

    /// Store rooted at `base`. The directory is created lazily on save.
    pub fn at(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Directory holding the config files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File backing `key`, or [`ConfigError::Invalid`] for a malformed key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ConfigError> {
        check_key(key)?;
        Ok(self.base.join(key).with_extension(EXTENSION))
    }

    /// Keys that currently have a file, sorted. A missing base directory
    /// holds no keys.
    pub fn keys(&self) -> Result<Vec<String>, ConfigError> {
        let entries = match fs::read_dir(&self.base) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if check_key(stem).is_ok() {
                    keys.push(stem.to_owned());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.base)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, data)?;
        if let Err(err) = fs::rename(&staging, &path) {
            // Leave no staging file behind.
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        debug!(path = %path.display(), bytes = data.len(), "saved config");
        Ok(())
    }
}
