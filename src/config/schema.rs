//! Configuration schema for Chrysanthium
//!
//! Configuration is stored at `~/.config/chrysanthium/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Daily quote settings
    pub quotes: QuotesConfig,

    /// Content build settings
    pub content: ContentConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

impl GeneralConfig {
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Daily quote configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotesConfig {
    /// Where the quote list comes from: an http(s) URL or a local path
    pub source: String,

    /// Name of the storage slot holding the rotation record
    pub slot: String,

    /// Timeout for remote fetches, in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            source: "quotes.json".to_string(),
            slot: "senshi".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

impl QuotesConfig {
    /// Slot names become file names in the state directory
    pub fn is_valid_slot(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
    }
}

/// Content build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the markdown sources
    pub dir: PathBuf,

    /// Git binary used to read file history
    pub git: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("posts"),
            git: "git".to_string(),
        }
    }
}
