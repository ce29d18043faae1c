//! Request counters in Prometheus exposition format.

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use prometheus::{
    register_int_counter_with_registry, register_int_gauge_with_registry, Encoder, IntCounter,
    IntGauge, Registry, TextEncoder,
};
use tracing::debug;

use crate::server::AppState;

/// HTTP metrics, owned by the application state rather than living in
/// process globals.
pub struct HttpMetrics {
    requests_total: IntCounter,
    uptime_seconds: IntGauge,
    // Status code of the most recently completed response. Last-write-wins
    // under concurrent requests; the exact update point relative to the
    // response write is not contractual.
    last_status: AtomicU16,
    started: Instant,
    registry: Registry,
}

impl HttpMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let requests_total = register_int_counter_with_registry!(
            "leaflove_requests_total",
            "Total HTTP requests.",
            registry
        )
        .unwrap();

        let uptime_seconds = register_int_gauge_with_registry!(
            "leaflove_uptime_seconds",
            "Process uptime in seconds.",
            registry
        )
        .unwrap();

        Self {
            requests_total,
            uptime_seconds,
            last_status: AtomicU16::new(0),
            started: Instant::now(),
            registry,
        }
    }

    /// Count one inbound request.
    pub fn record_request(&self) {
        self.requests_total.inc();
    }

    pub fn record_status(&self, status: u16) {
        self.last_status.store(status, Ordering::Relaxed);
    }

    pub fn last_status(&self) -> u16 {
        self.last_status.load(Ordering::Relaxed)
    }

    /// Export all registered families in Prometheus text format. Uptime is
    /// refreshed to the truncated elapsed seconds at scrape time.
    pub fn export(&self) -> String {
        self.uptime_seconds.set(self.started.elapsed().as_secs() as i64);

        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }
}

impl Default for HttpMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware wrapped around the whole router: counts every request (static
/// files and the 404 fallback included) and remembers the status of the most
/// recently completed response.
pub async fn track_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.metrics.record_request();

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    state.metrics.record_status(status.as_u16());
    debug!("{} {} {} {:?}", method, path, status.as_u16(), started.elapsed());

    response
}
