//! Configuration management for Chrysanthium

pub mod schema;

pub use schema::{Config, QuotesConfig};

use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
    state_dir: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            state_dir: Self::default_state_dir(),
        }
    }

    /// Create a config manager with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            state_dir: Self::default_state_dir(),
        }
    }

    /// Override the state directory
    pub fn with_state_dir(mut self, dir: PathBuf) -> Self {
        self.state_dir = dir;
        self
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chrysanthium")
            .join("config.toml")
    }

    /// Get the default state directory path
    pub fn default_state_dir() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chrysanthium")
    }

    /// Get the state directory path
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// Path of the file backing a named storage slot
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.state_dir.join(format!("{}.json", slot))
    }

    /// Load configuration, using defaults if the file does not exist
    pub async fn load(&self) -> ChrysanthiumResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> ChrysanthiumResult<Config> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            ChrysanthiumError::io(format!("reading config from {}", path.display()), e)
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ChrysanthiumError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if !QuotesConfig::is_valid_slot(&config.quotes.slot) {
            return Err(ChrysanthiumError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: format!("quotes.slot '{}' is not a plain name", config.quotes.slot),
            });
        }

        Ok(config)
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> ChrysanthiumResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ChrysanthiumError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            ChrysanthiumError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the state directory exists
    pub async fn ensure_state_dir(&self) -> ChrysanthiumResult<()> {
        fs::create_dir_all(&self.state_dir).await.map_err(|e| {
            ChrysanthiumError::io(
                format!("creating directory {}", self.state_dir.display()),
                e,
            )
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
