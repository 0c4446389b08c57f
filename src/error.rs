//! Error types for Chrysanthium
//!
//! All modules use `ChrysanthiumResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Chrysanthium operations
pub type ChrysanthiumResult<T> = Result<T, ChrysanthiumError>;

/// All errors that can occur in Chrysanthium
#[derive(Error, Debug)]
pub enum ChrysanthiumError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Quote errors
    #[error("Failed to fetch quotes from {source_name}: {reason}")]
    QuoteFetch { source_name: String, reason: String },

    #[error("Quote source {0} returned no quotes")]
    QuoteSourceEmpty(String),

    #[error("Quote refill task failed: {0}")]
    RefillTask(String),

    // Content errors
    #[error("Content directory not found: {0}")]
    ContentDirNotFound(PathBuf),

    #[error("Invalid front matter in {path}: {reason}")]
    FrontMatter { path: PathBuf, reason: String },

    #[error("Invalid date '{value}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate { value: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl ChrysanthiumError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a quote fetch error
    pub fn fetch(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::QuoteFetch {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if the next visit may succeed where this one failed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::QuoteFetch { .. } | Self::QuoteSourceEmpty(_) | Self::RefillTask(_)
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::QuoteFetch { .. } => Some("Check quotes.source in: chrysanthium config show"),
            Self::ContentDirNotFound(_) => Some("Pass --content or set content.dir in the config"),
            Self::InvalidDate { .. } => Some("Use a date like 2021-03-05"),
            Self::ConfigInvalid { .. } => Some("Run: chrysanthium config path"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ChrysanthiumError::fetch("quotes.json", "connection refused");
        assert_eq!(
            err.to_string(),
            "Failed to fetch quotes from quotes.json: connection refused"
        );
    }

    #[test]
    fn error_hint() {
        let err = ChrysanthiumError::InvalidDate {
            value: "yesterday".to_string(),
        };
        assert_eq!(err.hint(), Some("Use a date like 2021-03-05"));
        assert_eq!(ChrysanthiumError::User("x".into()).hint(), None);
    }

    #[test]
    fn error_retryable() {
        assert!(ChrysanthiumError::QuoteSourceEmpty("quotes.json".into()).is_retryable());
        assert!(!ChrysanthiumError::ContentDirNotFound(PathBuf::from("posts")).is_retryable());
    }
}
