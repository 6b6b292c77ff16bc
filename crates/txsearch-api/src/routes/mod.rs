//! Route modules for the API server
//!
//! - transactions: search with pagination
//! - system: health and dataset summary
//!
//! Each module has a mod.rs for exports and an api.rs with the JSON endpoints.

pub mod system;
pub mod transactions;
