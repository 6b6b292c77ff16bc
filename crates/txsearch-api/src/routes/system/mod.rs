//! System routes - health and dataset summary

pub mod api;

pub use api::{api_summary, health_check};
