//! Transactions API endpoints - JSON API

use crate::{ApiError, AppState};
use axum::extract::{Query, State};
use axum::Json;
use std::collections::HashMap;
use txsearch_core::{PageResult, TransactionView};

/// Search transactions with pagination (JSON API)
pub async fn api_transactions(
    state: State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<Json<PageResult<TransactionView>>, ApiError> {
    let service = state.service.read().await;
    let page = service.search(
        params.get("q").map(|s| s.as_str()),
        params.get("page").map(|s| s.as_str()),
        params.get("limit").map(|s| s.as_str()),
    )?;
    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{get_json, ready_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_default_page() {
        let (status, body) = get_json(ready_state(25), "/api/transactions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentPage"], 1);
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["totalItems"], 25);
        assert_eq!(body["items"].as_array().unwrap().len(), 10);
        assert_eq!(body["items"][0]["amount"], "1.000");
        assert!(body["items"][0].get("search_key").is_none());
    }

    #[tokio::test]
    async fn test_search_and_page() {
        let (status, body) = get_json(
            ready_state(25),
            "/api/transactions?q=%C4%90%C3%A0%20N%E1%BA%B5ng&page=3&limit=10",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalItems"], 25);
        assert_eq!(body["items"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_amount_query() {
        let (_, body) = get_json(ready_state(25), "/api/transactions?q=12.000").await;
        assert_eq!(body["totalItems"], 1);
        assert_eq!(body["items"][0]["amount"], "12.000");
        assert_eq!(body["items"][0]["code"], "c12");
    }

    #[tokio::test]
    async fn test_bad_pagination_defaults() {
        let (status, body) =
            get_json(ready_state(25), "/api/transactions?page=abc&limit=-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentPage"], 1);
        assert_eq!(body["items"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_no_matches() {
        let (status, body) = get_json(ready_state(5), "/api/transactions?q=zzz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalItems"], 0);
        assert_eq!(body["totalPages"], 0);
        assert_eq!(body["items"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_loading_returns_503() {
        let (status, body) =
            get_json(crate::test_support::loading_state(), "/api/transactions").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "NOT_LOADED");
    }
}
