//! Error types for txsearch-dataset

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Syntax error at {location}: {message}")]
    SyntaxError { location: String, message: String },

    #[error("Invalid amount '{value}' in record {index}")]
    InvalidAmount { index: usize, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
