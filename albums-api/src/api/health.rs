//! Health check endpoint

use axum::{extract::State, routing::get, Router};
use chrono::Utc;
use serde::Serialize;

use super::{get_build_info, PrettyJson};
use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub uptime_seconds: i64,
    pub album_count: usize,
}

/// GET /health
///
/// Reports liveness plus the current number of stored albums.
pub async fn health_check(State(state): State<AppState>) -> PrettyJson<HealthResponse> {
    PrettyJson(HealthResponse {
        status: "ok".to_string(),
        module: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.startup_time).num_seconds(),
        album_count: state.store.len().await,
    })
}

/// Build health check and build info routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/build_info", get(get_build_info))
}
