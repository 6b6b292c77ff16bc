//! Transaction routes - search and pagination
//!
//! Features:
//! - Search by notes, amount (dots ignored) or exact code
//! - Page/limit pagination with lenient defaults

pub mod api;

pub use api::api_transactions;
