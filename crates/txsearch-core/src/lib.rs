//! Core search logic for txsearch
//!
//! - normalize: search key normalization shared by records and queries
//! - dataset: loaded records, sorted by amount
//! - cache: bounded, time-expiring query result cache
//! - engine: cached linear search
//! - pagination: page slicing and the public record view
//! - service: loading/ready lifecycle around the engine

pub mod cache;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod query;
pub mod service;

pub use cache::{CacheStats, QueryCache};
pub use dataset::{Dataset, Matches, Transaction};
pub use engine::{QueryMatcher, SearchEngine};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use normalize::{amount_form, normalize};
pub use pagination::{paginate, PageRequest, PageResult, TransactionView};
pub use query::SearchQuery;
pub use service::{SearchService, ServiceState, ServiceSummary};
