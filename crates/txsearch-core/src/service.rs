//! Search service lifecycle
//!
//! The service starts in `Loading` and answers `NotLoaded` until the dataset
//! is installed. The dataset is installed once and never replaced.

use crate::cache::{CacheStats, QueryCache};
use crate::dataset::Dataset;
use crate::engine::SearchEngine;
use crate::error::{CoreError, CoreResult};
use crate::pagination::{paginate, PageRequest, PageResult, TransactionView};
use crate::query::SearchQuery;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use txsearch_config::{CacheConfig, Config};
use txsearch_dataset::ReaderRef;

/// Service lifecycle state
pub enum ServiceState {
    Loading,
    Ready(Arc<SearchEngine>),
}

/// Dataset and cache overview
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSummary {
    pub total_transactions: usize,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub scans: u64,
    pub cache: CacheStats,
}

pub struct SearchService {
    state: ServiceState,
    reader: ReaderRef,
    dataset_path: PathBuf,
    cache_config: CacheConfig,
    default_page_size: usize,
}

impl SearchService {
    /// Create a service in the `Loading` state
    pub fn new(config: &Config, reader: ReaderRef) -> Self {
        Self {
            state: ServiceState::Loading,
            reader,
            dataset_path: config.dataset_path(),
            cache_config: config.cache.clone(),
            default_page_size: config.pagination.default_page_size,
        }
    }

    /// Create a service that is ready with the given dataset
    pub fn with_dataset(config: &Config, reader: ReaderRef, dataset: Dataset) -> Self {
        let cache = QueryCache::from_config(&config.cache);
        Self {
            state: ServiceState::Ready(Arc::new(SearchEngine::new(dataset, cache))),
            ..Self::new(config, reader)
        }
    }

    pub fn state(&self) -> &ServiceState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ServiceState::Ready(_))
    }

    /// The engine, or `NotLoaded` while still loading
    pub fn engine(&self) -> CoreResult<Arc<SearchEngine>> {
        match &self.state {
            ServiceState::Ready(engine) => Ok(Arc::clone(engine)),
            ServiceState::Loading => Err(CoreError::NotLoaded),
        }
    }

    /// Read the configured dataset file
    pub async fn read_dataset(&self) -> CoreResult<Dataset> {
        Dataset::load(self.reader.as_ref(), &self.dataset_path).await
    }

    /// Flip `Loading` to `Ready` with `dataset`. Installing twice is an error.
    pub fn install(&mut self, dataset: Dataset) -> CoreResult<usize> {
        if self.is_ready() {
            return Err(CoreError::AlreadyLoaded);
        }
        let count = dataset.len();
        let cache = QueryCache::from_config(&self.cache_config);
        self.state = ServiceState::Ready(Arc::new(SearchEngine::new(dataset, cache)));
        Ok(count)
    }

    /// Run a search request and return one page of projected records
    pub fn search(
        &self,
        q: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> CoreResult<PageResult<TransactionView>> {
        let engine = self.engine()?;
        let request = PageRequest::from_params(page, limit, self.default_page_size);
        let query = SearchQuery::new(q, request);
        log::debug!(
            "query '{}' -> '{}' (amount form '{}'), page {} limit {}",
            query.raw,
            query.normalized,
            query.amount_form,
            query.page,
            query.limit
        );

        let matches = engine.search(&query);
        Ok(paginate(&matches, query.page_request()).map(|tx| TransactionView::from(&*tx)))
    }

    pub fn summary(&self) -> CoreResult<ServiceSummary> {
        let engine = self.engine()?;
        let dataset = engine.dataset();
        Ok(ServiceSummary {
            total_transactions: dataset.len(),
            source: dataset.source().to_string(),
            loaded_at: dataset.loaded_at(),
            scans: engine.scan_count(),
            cache: engine.cache().stats(),
        })
    }
}
