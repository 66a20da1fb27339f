mod device;

pub use device::DeviceState;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/puffless[-dev]/` based on PUFFLESS_ENV.
///
/// Set PUFFLESS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PUFFLESS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("puffless-dev")
    } else {
        base_dir.join("puffless")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
