//! Search engine: cache lookup in front of a linear dataset scan

use crate::cache::QueryCache;
use crate::dataset::{Dataset, Matches, Transaction};
use crate::query::SearchQuery;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Match predicate for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatcher<'a> {
    key: &'a str,
    amount: Option<i64>,
}

impl<'a> QueryMatcher<'a> {
    pub fn new(query: &'a SearchQuery) -> Self {
        Self {
            key: &query.normalized,
            amount: query.amount_form.parse().ok(),
        }
    }

    /// Notes contain the query, or the amount equals it, or the code is it exactly
    pub fn matches(&self, tx: &Transaction) -> bool {
        tx.search_key.contains(self.key)
            || self.amount == Some(tx.amount)
            || tx.code == self.key
    }
}

pub struct SearchEngine {
    dataset: Arc<Dataset>,
    cache: QueryCache,
    scans: AtomicU64,
}

impl SearchEngine {
    pub fn new(dataset: Dataset, cache: QueryCache) -> Self {
        Self {
            dataset: Arc::new(dataset),
            cache,
            scans: AtomicU64::new(0),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Number of full scans performed so far
    pub fn scan_count(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    /// All records matching a query, in dataset order.
    /// The empty query returns the dataset itself and never touches the cache.
    pub fn search(&self, query: &SearchQuery) -> Matches {
        if query.normalized.is_empty() {
            return self.dataset.records();
        }

        if let Some(hit) = self.cache.get(&query.normalized) {
            log::debug!("Cache hit for '{}' ({} matches)", query.normalized, hit.len());
            return hit;
        }

        let matches = self.scan(query);
        self.cache.set(query.normalized.clone(), Arc::clone(&matches));
        matches
    }

    /// Uncached linear scan
    pub fn scan(&self, query: &SearchQuery) -> Matches {
        self.scans.fetch_add(1, Ordering::Relaxed);
        let matcher = QueryMatcher::new(query);
        self.dataset
            .records()
            .iter()
            .filter(|tx| matcher.matches(tx))
            .cloned()
            .collect()
    }
}
