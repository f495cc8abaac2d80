//! Loading `BotConfig` from TOML.

use std::fs;
use std::path::Path;

use bakerbot_core::config::BotConfig;
use bakerbot_core::error::{BakerError, Result};

use crate::paths::BakerPaths;

/// Reads the config at `path`; a missing file yields defaults.
pub fn load_config(path: &Path) -> Result<BotConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(BotConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: BotConfig = toml::from_str(&content).map_err(|e| {
        BakerError::config(format!("Invalid config file {}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Reads the config from the platform config directory.
pub fn load_default_config() -> Result<BotConfig> {
    load_config(&BakerPaths::config_file()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "business_name = \"Crumbs\"\n[typing]\nbase_delay_ms = 0\njitter_ms = 0\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.business_name, "Crumbs");
        assert_eq!(config.typing.base_delay_ms, 0);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "business_name = [").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, BakerError::Config(_)));
    }
}
