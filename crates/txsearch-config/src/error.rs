//! Error types for txsearch-config

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigErrorCode {
    /// File not found
    FileNotFound,
    /// Invalid YAML format
    InvalidYaml,
    /// Invalid field value
    InvalidValue,
    /// IO error
    IoError,
}

impl std::fmt::Display for ConfigErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErrorCode::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            ConfigErrorCode::InvalidYaml => write!(f, "INVALID_YAML"),
            ConfigErrorCode::InvalidValue => write!(f, "INVALID_VALUE"),
            ConfigErrorCode::IoError => write!(f, "IO_ERROR"),
        }
    }
}

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid YAML format: {message}")]
    InvalidYaml { message: String },

    #[error("Invalid field value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("IO error occurred")]
    IoError,
}

impl ConfigError {
    /// Get the error code
    pub fn code(&self) -> ConfigErrorCode {
        match self {
            ConfigError::FileNotFound { .. } => ConfigErrorCode::FileNotFound,
            ConfigError::InvalidYaml { .. } => ConfigErrorCode::InvalidYaml,
            ConfigError::InvalidValue { .. } => ConfigErrorCode::InvalidValue,
            ConfigError::IoError => ConfigErrorCode::IoError,
        }
    }

    /// Hints shown next to the error at startup
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            ConfigError::FileNotFound { .. } => vec![
                "Check if the config file path is correct.".to_string(),
                "Use --config flag to specify the config file path.".to_string(),
            ],
            ConfigError::InvalidYaml { .. } => vec![
                "Run with --print-default-config to see a valid file.".to_string(),
            ],
            ConfigError::InvalidValue { reason, .. } => vec![reason.clone()],
            ConfigError::IoError => vec![],
        }
    }
}
