//! Configuration management for roster.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "roster";

/// Default data file name.
const DATA_FILE_NAME: &str = "students.txt";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "ROSTER_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ROSTER_`, sections split on `__`)
/// 2. TOML config file at `~/.config/roster/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the student data file.
    /// Defaults to `~/.local/share/roster/students.txt`
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A config file that does not exist contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.storage.data_file {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "storage.data_file must not be empty".to_string(),
                });
            }
            if path.is_dir() {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "storage.data_file points at a directory: {}",
                        path.display()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Get the data file path, resolving defaults if not set.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.storage
            .data_file
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATA_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.data_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_data_file_default() {
        let config = Config::default();
        let path = config.data_file();

        assert!(path.to_string_lossy().contains("roster"));
        assert!(path.to_string_lossy().ends_with("students.txt"));
    }

    #[test]
    fn test_data_file_custom() {
        let mut config = Config::default();
        config.storage.data_file = Some(PathBuf::from("/custom/path/students.txt"));

        assert_eq!(
            config.data_file(),
            PathBuf::from("/custom/path/students.txt")
        );
    }

    #[test]
    fn test_validate_empty_data_file() {
        let mut config = Config::default();
        config.storage.data_file = Some(PathBuf::new());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("data_file"));
    }

    #[test]
    fn test_validate_directory_data_file() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.data_file = Some(dir.path().to_path_buf());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("directory"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("roster"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[storage]\ndata_file = \"/srv/school/students.txt\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(config_path)).unwrap();
        assert_eq!(
            config.data_file(),
            PathBuf::from("/srv/school/students.txt")
        );
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage\n").unwrap();

        let err = Config::load_from(Some(config_path)).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_storage_config_serialize() {
        let storage = StorageConfig {
            data_file: Some(PathBuf::from("/tmp/s.txt")),
        };
        let json = serde_json::to_string(&storage).unwrap();
        assert!(json.contains("data_file"));
        assert!(json.contains("/tmp/s.txt"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
