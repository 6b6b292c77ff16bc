//! In-memory transaction dataset

use crate::error::CoreError;
use crate::normalize::normalize;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use txsearch_dataset::{DatasetError, DatasetReader, RawTransaction};
use txsearch_utils::format_amount;

/// Shared, ordered list of records
pub type Matches = Arc<[Arc<Transaction>]>;

/// A loaded transaction with its precomputed search key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub date: String,
    pub amount: i64,
    pub notes: String,
    pub code: String,
    #[serde(skip)]
    pub search_key: String,
}

impl Transaction {
    /// Build a record, deriving the search key from the notes
    pub fn new(
        date: impl Into<String>,
        amount: i64,
        notes: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        let notes = notes.into();
        Self {
            date: date.into(),
            amount,
            search_key: normalize(&notes),
            notes,
            code: code.into(),
        }
    }

    /// Amount with thousands separators
    pub fn display_amount(&self) -> String {
        format_amount(self.amount)
    }

    fn from_raw(index: usize, raw: RawTransaction) -> Result<Self, CoreError> {
        let amount = raw.amount.to_integer().map_err(|_| DatasetError::InvalidAmount {
            index,
            value: raw.amount.to_string(),
        })?;
        Ok(Self::new(raw.date, amount, raw.notes, raw.code))
    }
}

/// Immutable dataset sorted ascending by amount
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Matches,
    loaded_at: DateTime<Utc>,
    source: String,
}

impl Dataset {
    /// Build a dataset from records, sorting them by amount.
    /// The sort is stable, so equal amounts keep their input order.
    pub fn new(mut records: Vec<Transaction>, source: impl Into<String>) -> Self {
        records.sort_by_key(|t| t.amount);
        Self {
            records: records.into_iter().map(Arc::new).collect(),
            loaded_at: Utc::now(),
            source: source.into(),
        }
    }

    /// Convert raw file records into a dataset
    pub fn from_raw(
        raw: Vec<RawTransaction>,
        source: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| Transaction::from_raw(i, r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(records, source))
    }

    /// Read a dataset file through the given reader
    pub async fn load(reader: &dyn DatasetReader, path: &Path) -> Result<Self, CoreError> {
        let raw = reader.read_file(path).await?;
        let dataset = Self::from_raw(raw, path.to_string_lossy())?;
        log::info!("Loaded {} transactions from {}", dataset.len(), dataset.source);
        Ok(dataset)
    }

    /// All records in amount order
    pub fn records(&self) -> Matches {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use txsearch_dataset::{JsonDatasetReader, RawAmount};

    fn raw(amount: RawAmount, notes: &str) -> RawTransaction {
        RawTransaction {
            date: "01/09/2024".to_string(),
            amount,
            notes: notes.to_string(),
            code: String::new(),
        }
    }

    #[test]
    fn test_transaction_search_key() {
        let tx = Transaction::new("01/09/2024", 1234567, "Ủng hộ Đà Nẵng", "5213");
        assert_eq!(tx.search_key, "unghodanang");
        assert_eq!(tx.display_amount(), "1.234.567");
    }

    #[test]
    fn test_search_key_not_serialized() {
        let tx = Transaction::new("01/09/2024", 10, "Ủng hộ", "1");
        let json = serde_json::to_value(&tx).unwrap();
        assert!(json.get("search_key").is_none());
        assert_eq!(json["amount"], 10);
    }

    #[test]
    fn test_from_raw_sorts_by_amount() {
        let dataset = Dataset::from_raw(
            vec![
                raw(RawAmount::Text("2,000,000".to_string()), "b"),
                raw(RawAmount::Integer(500), "a"),
                raw(RawAmount::Text("1.000".to_string()), "c"),
                raw(RawAmount::Integer(500), "d"),
            ],
            "test",
        )
        .unwrap();

        let records = dataset.records();
        let amounts: Vec<i64> = records.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![500, 500, 1000, 2000000]);
        let notes: Vec<&str> = records.iter().map(|t| t.notes.as_str()).collect();
        assert_eq!(notes, vec!["a", "d", "c", "b"]);
    }

    #[test]
    fn test_from_raw_rejects_bad_amount() {
        let err = Dataset::from_raw(
            vec![
                raw(RawAmount::Integer(1), "ok"),
                raw(RawAmount::Text("n/a".to_string()), "bad"),
            ],
            "test",
        )
        .unwrap_err();

        match err {
            CoreError::Dataset(DatasetError::InvalidAmount { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.json");
        std::fs::write(
            &path,
            r#"[{"date":"02/09/2024","amount":"300,000","notes":"Cứu trợ","code":"22"},
                {"date":"01/09/2024","amount":"100,000","notes":"Ủng hộ","code":"11"}]"#,
        )
        .unwrap();

        let dataset = Dataset::load(&JsonDatasetReader, &path).await.unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].code, "11");
        assert_eq!(dataset.records()[1].search_key, "cuutro");
        assert!(dataset.source().ends_with("transactions.json"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(&JsonDatasetReader, &dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Dataset(_)));
    }
}
