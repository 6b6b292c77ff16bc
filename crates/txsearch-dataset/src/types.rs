//! Raw record types as they appear in the dataset file

use serde::{Deserialize, Serialize};
use txsearch_utils::{parse_grouped_integer, NumberError};

/// Amount as written in the file: a JSON number or a grouped string like `"1,250,000"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawAmount {
    /// Resolve to a whole amount. Fractional numbers are rejected.
    pub fn to_integer(&self) -> Result<i64, NumberError> {
        match self {
            RawAmount::Integer(n) => Ok(*n),
            RawAmount::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() && f.abs() < i64::MAX as f64 {
                    Ok(*f as i64)
                } else {
                    Err(NumberError::NotInteger { value: f.to_string() })
                }
            }
            RawAmount::Text(s) => parse_grouped_integer(s),
        }
    }
}

impl std::fmt::Display for RawAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawAmount::Integer(n) => write!(f, "{}", n),
            RawAmount::Float(n) => write!(f, "{}", n),
            RawAmount::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One transaction record from the dataset file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub date: String,
    pub amount: RawAmount,
    pub notes: String,
    #[serde(default)]
    pub code: String,
}
