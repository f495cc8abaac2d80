//! Platform paths for Baker Bot files.
//!
//! ```text
//! ~/.config/bakerbot/          # Config directory
//! ├── config.toml              # Bot configuration
//! ├── storage.json             # Persisted conversation (key/value store)
//! └── logs/                    # Application logs
//!     └── bakerbot.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for bakerbot_core::BakerError {
    fn from(e: PathError) -> Self {
        bakerbot_core::BakerError::config(e.to_string())
    }
}

pub struct BakerPaths;

impl BakerPaths {
    const APP_DIR: &'static str = "bakerbot";

    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("storage.json"))
    }

    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
