//! Transaction dataset reader
//!
//! Reads the JSON array of transaction records the service searches over.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

pub mod error;
pub mod types;

pub use error::DatasetError;
pub use types::{RawAmount, RawTransaction};

// ==================== Reader Trait ====================

/// Reader reference type
pub type ReaderRef = Arc<dyn DatasetReader>;

/// Trait for dataset readers
#[async_trait]
pub trait DatasetReader: Send + Sync {
    /// Parse dataset content and return raw records
    async fn parse(&self, content: &str) -> Result<Vec<RawTransaction>, DatasetError>;

    /// Read and parse a dataset file
    async fn read_file(&self, path: &Path) -> Result<Vec<RawTransaction>, DatasetError>;
}

/// JSON array reader
#[derive(Debug, Default)]
pub struct JsonDatasetReader;

impl JsonDatasetReader {
    fn parse_with_source(content: &str, source: &str) -> Result<Vec<RawTransaction>, DatasetError> {
        serde_json::from_str(content).map_err(|e| DatasetError::SyntaxError {
            location: format!("{}:{}:{}", source, e.line(), e.column()),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl DatasetReader for JsonDatasetReader {
    async fn parse(&self, content: &str) -> Result<Vec<RawTransaction>, DatasetError> {
        Self::parse_with_source(content, "input")
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<RawTransaction>, DatasetError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse_with_source(&content, &path.to_string_lossy())
    }
}
