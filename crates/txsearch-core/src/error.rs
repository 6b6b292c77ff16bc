//! Error types for txsearch-core
//!
//! Errors carry a stable code and severity so the HTTP layer can render
//! them without matching on variants.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use txsearch_dataset::DatasetError;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Dataset not loaded yet
    NotLoaded,
    /// Dataset already installed
    AlreadyLoaded,
    /// Dataset file missing or unreadable
    IoError,
    /// Dataset content could not be parsed
    ParseError,
    /// Invalid data format
    InvalidFormat,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NotLoaded => write!(f, "NOT_LOADED"),
            ErrorCode::AlreadyLoaded => write!(f, "ALREADY_LOADED"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::ParseError => write!(f, "PARSE_ERROR"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - operation may be affected
    Warning,
    /// Critical - the service cannot run
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            suggestions: vec![],
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Main error type for txsearch-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dataset not loaded")]
    NotLoaded,

    #[error("Dataset already loaded")]
    AlreadyLoaded,

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotLoaded => ErrorCode::NotLoaded,
            CoreError::AlreadyLoaded => ErrorCode::AlreadyLoaded,
            CoreError::Dataset(DatasetError::IoError(_)) => ErrorCode::IoError,
            CoreError::Dataset(DatasetError::SyntaxError { .. }) => ErrorCode::ParseError,
            CoreError::Dataset(DatasetError::InvalidAmount { .. }) => ErrorCode::InvalidFormat,
        }
    }

    /// Get the severity level. Load failures are critical at boot.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::NotLoaded | CoreError::AlreadyLoaded => ErrorSeverity::Warning,
            CoreError::Dataset(_) => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::NotLoaded => details.with_suggestion(
                "The dataset is still loading, retry shortly.".to_string(),
            ),
            CoreError::AlreadyLoaded => details.with_suggestion(
                "The dataset is loaded once at startup; restart the service to load new data."
                    .to_string(),
            ),
            CoreError::Dataset(DatasetError::IoError(_)) => details.with_suggestion(
                "Check that data.path and data.dataset_file point to a readable file.".to_string(),
            ),
            CoreError::Dataset(DatasetError::SyntaxError { .. }) => details.with_suggestion(
                "The dataset must be a JSON array of {date, amount, notes, code} objects."
                    .to_string(),
            ),
            CoreError::Dataset(DatasetError::InvalidAmount { .. }) => details.with_suggestion(
                "Amounts must be whole numbers, optionally grouped with ',' or '.'.".to_string(),
            ),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================
