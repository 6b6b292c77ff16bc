//! Error types for txsearch-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use txsearch_core::CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Service is still loading")]
    NotReady,

    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotLoaded => ApiError::NotReady,
            other => ApiError::Core(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = match &self {
            ApiError::NotReady => CoreError::NotLoaded.to_details(),
            ApiError::Core(error) => {
                log::error!("Request failed: {}", error.to_details());
                error.to_details()
            }
        };
        (self.status(), Json(details)).into_response()
    }
}
