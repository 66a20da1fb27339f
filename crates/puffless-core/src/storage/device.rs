//! TOML-backed device-local state.
//!
//! The only data the app persists on the device: whether onboarding has
//! already been completed (read once at flow start to pick the login
//! entry point over step 1), and the last fetched daily quote as an
//! offline fallback.
//!
//! Stored at `~/.config/puffless/device.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::backend::DailyQuote;
use crate::error::ConfigError;

/// Device-local state.
///
/// Serialized to/from TOML at `~/.config/puffless/device.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Set after the first completed onboarding flow on this device.
    #[serde(default)]
    pub onboarding_completed: bool,
    /// Most recently fetched quote, shown when the backend is
    /// unreachable.
    #[serde(default)]
    pub cached_quote: Option<DailyQuote>,
}

impl DeviceState {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("device.toml"))
    }

    /// Load from disk or return the defaults when no file exists yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path. Missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the state cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
