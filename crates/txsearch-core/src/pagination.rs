//! Page slicing and page metadata

use crate::dataset::Transaction;
use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Requested page, both values at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Build from raw query parameters. Missing, non-numeric and
    /// non-positive values fall back to the defaults.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, default_limit: usize) -> Self {
        Self::new(
            parse_positive(page).unwrap_or(DEFAULT_PAGE),
            parse_positive(limit).unwrap_or(default_limit),
        )
    }

    pub fn start_index(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn end_index(&self) -> usize {
        self.start_index().saturating_add(self.limit)
    }
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Slice `items` into the requested page. Pages past the end are empty, not errors.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> PageResult<T> {
    let total_items = items.len();
    let start = request.start_index().min(total_items);
    let end = request.end_index().min(total_items);

    PageResult {
        current_page: request.page,
        total_pages: total_items.div_ceil(request.limit),
        total_items,
        items: items[start..end].to_vec(),
    }
}

/// Public view of a transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    pub date: String,
    pub amount: String,
    pub notes: String,
    pub code: String,
}

impl From<&Transaction> for TransactionView {
    fn from(tx: &Transaction) -> Self {
        Self {
            date: tx.date.clone(),
            amount: tx.display_amount(),
            notes: tx.notes.clone(),
            code: tx.code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_pages_of_25() {
        let items = numbers(25);

        let first = paginate(&items, PageRequest::new(1, 10));
        assert_eq!(first.items, numbers(10));
        assert_eq!(first.total_pages, 3);

        let third = paginate(&items, PageRequest::new(3, 10));
        assert_eq!(third.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(third.total_pages, 3);

        let fourth = paginate(&items, PageRequest::new(4, 10));
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.total_pages, 3);
        assert_eq!(fourth.total_items, 25);
        assert_eq!(fourth.current_page, 4);
    }

    #[test]
    fn test_empty_results() {
        let page = paginate::<usize>(&[], PageRequest::default());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items = numbers(5);
        let page = paginate(&items, PageRequest::new(usize::MAX, usize::MAX));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_from_params_defaults() {
        assert_eq!(PageRequest::from_params(None, None, 10), PageRequest::new(1, 10));
        assert_eq!(
            PageRequest::from_params(Some("abc"), Some("x"), 10),
            PageRequest::new(1, 10)
        );
        assert_eq!(
            PageRequest::from_params(Some("0"), Some("-5"), 10),
            PageRequest::new(1, 10)
        );
        assert_eq!(
            PageRequest::from_params(Some(" 3 "), Some("25"), 10),
            PageRequest::new(3, 25)
        );
        assert_eq!(PageRequest::from_params(None, None, 50).limit, 50);
    }

    #[test]
    fn test_transaction_view() {
        let tx = Transaction::new("01/09/2024", 1234567, "Ủng hộ", "77");
        let view = TransactionView::from(&tx);
        assert_eq!(view.amount, "1.234.567");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["notes"], "Ủng hộ");
        assert!(json.get("search_key").is_none());
    }

    #[test]
    fn test_page_result_serializes_camel_case() {
        let page = paginate(&numbers(3), PageRequest::new(1, 2));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["items"], serde_json::json!([1, 2]));
    }
}
