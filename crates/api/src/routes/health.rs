use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET / -- liveness banner for the API root.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Maldives Island Tracker API" }))
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = atoll_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount liveness and health routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
