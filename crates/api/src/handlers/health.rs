use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Liveness message served at `/`.
pub const LIVENESS_MESSAGE: &str = "Cloud Kitchen API Running";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which store implementation is serving requests.
    pub store: &'static str,
    /// Whether the store answered a ping.
    pub db_healthy: bool,
}

/// GET / -- plain-text liveness check.
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health -- returns service and store health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.store.ping().await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store: state.store.backend(),
        db_healthy,
    })
}
