//! System API endpoints - JSON API

use crate::{ApiError, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use txsearch_core::ServiceSummary;

/// Health check endpoint, 503 until the dataset is installed
pub async fn health_check(state: State<AppState>) -> (StatusCode, &'static str) {
    if state.service.read().await.is_ready() {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "LOADING")
    }
}

/// Dataset and cache summary (JSON API)
pub async fn api_summary(state: State<AppState>) -> Result<Json<ServiceSummary>, ApiError> {
    let service = state.service.read().await;
    Ok(Json(service.summary()?))
}
