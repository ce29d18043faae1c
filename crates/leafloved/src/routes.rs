//! HTTP routes for leafloved.

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use leaflove_common::PlantPreferences;
use serde_json::json;
use tracing::{debug, error};

use crate::recommend;
use crate::render::{self, RenderError};
use crate::server::AppState;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Page Routes
// ============================================================================

pub fn page_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(home))
        .route("/recommend", post(recommend_form))
}

/// Homepage: the empty preference form.
async fn home() -> Result<Html<String>, Response> {
    render::home_page().map(Html).map_err(render_error)
}

/// Form submission: parse preferences out of the urlencoded body, run the
/// engine, render the result cards.
async fn recommend_form(
    form: Result<Form<PlantPreferences>, FormRejection>,
) -> Result<Html<String>, Response> {
    let Form(prefs) = form.map_err(|err| {
        debug!("rejected form submission: {err}");
        json_error(StatusCode::BAD_REQUEST, &format!("invalid form: {err}"))
    })?;

    let recs = recommend::recommend(&prefs);
    debug!("form recommendation matched {} plants", recs.len());
    render::results_page(&recs).map(Html).map_err(render_error)
}

// ============================================================================
// API Routes
// ============================================================================

pub fn api_routes() -> Router<AppStateArc> {
    Router::new().route("/api/recommend", get(recommend_api))
}

/// JSON variant of the recommender; same field names as the form, passed as
/// query parameters. Results depend only on the query, but clients must not
/// cache them.
async fn recommend_api(Query(prefs): Query<PlantPreferences>) -> impl IntoResponse {
    let recs = recommend::recommend(&prefs);
    ([(header::CACHE_CONTROL, "no-store")], Json(recs))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn health() -> &'static str {
    "ok"
}

// ============================================================================
// Metrics Routes
// ============================================================================

pub fn metrics_routes() -> Router<AppStateArc> {
    Router::new().route("/metrics", get(metrics_text))
}

async fn metrics_text(State(state): State<AppStateArc>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
        state.metrics.export(),
    )
}

// ============================================================================
// Fallback + error helpers
// ============================================================================

/// Fallback for paths no route claims.
pub async fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "route not found")
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn render_error(err: RenderError) -> Response {
    error!("render failed: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}
