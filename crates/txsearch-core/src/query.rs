//! Parsed search request

use crate::normalize::{amount_form, normalize};
use crate::pagination::PageRequest;

/// A search request after normalization and pagination defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub raw: String,
    pub normalized: String,
    pub amount_form: String,
    pub page: usize,
    pub limit: usize,
}

impl SearchQuery {
    pub fn new(raw: Option<&str>, request: PageRequest) -> Self {
        let raw = raw.unwrap_or_default().to_string();
        let normalized = normalize(&raw);
        Self {
            amount_form: amount_form(&normalized),
            normalized,
            raw,
            page: request.page,
            limit: request.limit,
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_normalizes() {
        let query = SearchQuery::new(Some(" 1.000.000 Đ "), PageRequest::new(2, 5));
        assert_eq!(query.normalized, "1.000.000d");
        assert_eq!(query.amount_form, "1000000d");
        assert_eq!(query.page_request(), PageRequest::new(2, 5));
    }

    #[test]
    fn test_missing_or_blank_query_is_empty() {
        assert_eq!(SearchQuery::new(None, PageRequest::default()).normalized, "");
        assert_eq!(SearchQuery::new(Some("   "), PageRequest::default()).normalized, "");
        assert_eq!(SearchQuery::new(Some("A"), PageRequest::default()).normalized, "a");
    }
}
