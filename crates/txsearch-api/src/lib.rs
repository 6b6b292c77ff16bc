//! HTTP API server for transaction search
//!
//! Routes are organized into modules:
//! - routes::transactions: search with pagination
//! - routes::system: health and summary
//!
//! Anything outside `/api` is served from the static UI directory.

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use txsearch_config::Config;
use txsearch_core::SearchService;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RwLock<SearchService>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::system::{api_summary, health_check};
    use routes::transactions::api_transactions;

    let static_dir = state.config.data.static_dir.clone();
    let cors = state.config.server.cors;

    let router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/summary", get(api_summary))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind the configured address
pub async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    TcpListener::bind(config.bind_address()).await
}

/// Serve requests on `listener` until Ctrl-C
pub async fn start_server(
    listener: TcpListener,
    config: Config,
    service: Arc<RwLock<SearchService>>,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    let static_dir = config.data.static_dir.clone();
    let router = create_router(AppState { service, config });

    log::info!("Starting txsearch server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /api/transactions?q=&page=&limit=");
    log::info!("  - /api/health");
    log::info!("  - /api/summary");
    log::info!("  - /* static files from {}", static_dir.display());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::path::Path;
    use tower::ServiceExt;
    use txsearch_core::{Dataset, Transaction};
    use txsearch_dataset::{JsonDatasetReader, ReaderRef};

    pub fn reader() -> ReaderRef {
        Arc::new(JsonDatasetReader)
    }

    pub fn config_for(data_dir: &Path) -> Config {
        let mut config = Config::default();
        config.data.path = data_dir.to_path_buf();
        config.data.static_dir = data_dir.join("ui");
        config
    }

    /// `n` records with amounts 1000..=n*1000 and codes c1..cn
    pub fn dataset_of(n: usize) -> Dataset {
        let records = (1..=n)
            .map(|i| {
                Transaction::new(
                    "01/09/2024",
                    i as i64 * 1000,
                    format!("Ủng hộ Đà Nẵng {i}"),
                    format!("c{i}"),
                )
            })
            .collect();
        Dataset::new(records, "test")
    }

    pub fn state_with(service: SearchService) -> AppState {
        AppState {
            service: Arc::new(RwLock::new(service)),
            config: Config::default(),
        }
    }

    pub fn ready_state(n: usize) -> AppState {
        state_with(SearchService::with_dataset(&Config::default(), reader(), dataset_of(n)))
    }

    pub fn loading_state() -> AppState {
        state_with(SearchService::new(&Config::default(), reader()))
    }

    pub async fn send(state: AppState, request: Request<Body>) -> (StatusCode, String) {
        let response = create_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body) = send(state, request).await;
        (status, serde_json::from_str(&body).unwrap())
    }
}
