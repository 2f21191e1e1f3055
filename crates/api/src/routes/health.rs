use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status: `ok` or `degraded`.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the game store answered a ping.
    pub store_healthy: bool,
}

/// GET /api/health -- returns service and store health.
///
/// Always 200; a failing store only downgrades `status`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match backlog_db::health_check(state.store.as_ref()).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Store health check failed");
            false
        }
    };

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// Mount health check routes (nested under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
