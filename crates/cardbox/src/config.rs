//! Configuration management for cardbox.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::storage::DEFAULT_MAX_BYTES;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "cardbox";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "snapshots.db";

/// Default draft file name.
const DRAFT_FILE_NAME: &str = "card.json";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CARDBOX_`)
/// 2. TOML config file at `~/.config/cardbox/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Sharing configuration.
    pub share: ShareConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the snapshot database file.
    /// Defaults to `~/.local/share/cardbox/snapshots.db`
    pub database_path: Option<PathBuf>,
    /// Path to the working-card draft file.
    /// Defaults to `~/.local/share/cardbox/card.json`
    pub draft_path: Option<PathBuf>,
    /// Byte budget for stored snapshots; oldest are evicted past this.
    pub max_share_bytes: u64,
}

/// Sharing-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Base URL that shareable links are built on.
    pub base_url: String,
    /// Secret granting edit capability when passed as the `admin` query
    /// parameter. `None` disables edit mode entirely. This is obscurity,
    /// not authentication.
    pub admin_token: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: None, // Will be resolved to default at runtime
            draft_path: None,
            max_share_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cardbox.local/".to_string(),
            admin_token: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `CARDBOX_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("CARDBOX_").split("_"));

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
        if self.storage.max_share_bytes == 0 {
            return Err(Error::ConfigValidation {
                message: "max_share_bytes must be greater than 0".to_string(),
            });
        }

        if Url::parse(&self.share.base_url).is_err() {
            return Err(Error::ConfigValidation {
                message: format!("base_url is not a valid URL: {}", self.share.base_url),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the draft path, resolving defaults if not set.
    #[must_use]
    pub fn draft_path(&self) -> PathBuf {
        self.storage
            .draft_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DRAFT_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.storage.max_share_bytes, DEFAULT_MAX_BYTES);
        assert_eq!(config.share.base_url, "https://cardbox.local/");
        assert!(config.share.admin_token.is_none());
    }

    #[test]
    fn test_default_storage_config() {
        let storage = StorageConfig::default();

        assert!(storage.database_path.is_none());
        assert!(storage.draft_path.is_none());
        assert_eq!(storage.max_share_bytes, 4_718_592);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_budget() {
        let mut config = Config::default();
        config.storage.max_share_bytes = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_share_bytes"));
    }

    #[test]
    fn test_validate_bad_base_url() {
        let mut config = Config::default();
        config.share.base_url = "not a url".to_string();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_url"));
    }

    #[test]
    fn test_database_path_default() {
        let config = Config::default();
        assert!(config
            .database_path()
            .to_string_lossy()
            .contains("snapshots.db"));
    }

    #[test]
    fn test_database_path_custom() {
        let mut config = Config::default();
        config.storage.database_path = Some(PathBuf::from("/custom/path/db.sqlite"));

        assert_eq!(
            config.database_path(),
            PathBuf::from("/custom/path/db.sqlite")
        );
    }

    #[test]
    fn test_draft_path_default() {
        let config = Config::default();
        assert!(config.draft_path().to_string_lossy().contains("card.json"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("cardbox"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_data_dir() {
        let path = Config::default_data_dir();
        assert!(path.to_string_lossy().contains("cardbox"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[share]\nbase_url = \"https://cards.example.com/\"\nadmin_token = \"s3cret\"\n\
             [storage]\nmax_share_bytes = 1024\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.share.base_url, "https://cards.example.com/");
        assert_eq!(config.share.admin_token.as_deref(), Some("s3cret"));
        assert_eq!(config.storage.max_share_bytes, 1024);
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("max_share_bytes"));
        assert!(json.contains("base_url"));
    }

    #[test]
    fn test_storage_config_deserialize() {
        let json = r#"{"max_share_bytes": 5000}"#;
        let storage: StorageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(storage.max_share_bytes, 5000);
        assert!(storage.database_path.is_none());
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
