//! HTTP server for leafloved.

use std::sync::Arc;

use anyhow::Result;
use axum::{middleware, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::metrics::{self, HttpMetrics};
use crate::routes;

/// Fixed bind address; the process has no other network configuration.
pub const BIND_ADDR: &str = "0.0.0.0:8080";

/// Directory served under /static (stylesheet and plant images).
pub const STATIC_DIR: &str = "web/static";

/// Application state shared across handlers. The catalog itself is a
/// read-only static and needs no slot here; the metrics registry is the
/// only mutable shared state.
pub struct AppState {
    pub metrics: HttpMetrics,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            metrics: HttpMetrics::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full router. Split out of [`run`] so tests can drive it
/// in-process without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::page_routes())
        .merge(routes::api_routes())
        .merge(routes::health_routes())
        .merge(routes::metrics_routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(routes::not_found)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, metrics::track_requests))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until ctrl-c. Failure to bind is the only fatal
/// error and propagates out to the caller.
pub async fn run(state: AppState) -> Result<()> {
    let state = Arc::new(state);
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!("Listening on http://{}", BIND_ADDR);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down gracefully");
    }
}
