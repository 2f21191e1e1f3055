//! Administrative bulk operations: seed and cleanup.
//!
//! These bypass request validation on purpose. They exist to reset a demo
//! collection and are not part of the validated CRUD contract.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use backlog_db::models::game::sample_games;

use crate::error::AppResult;
use crate::response::{DeletedResponse, InsertedResponse};
use crate::state::AppState;

/// POST /api/seed
///
/// Replace the collection contents with the fixed sample set.
pub async fn seed(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cleared = state.store.delete_all().await?;
    let inserted = state.store.insert_many(sample_games()).await?;

    tracing::info!(cleared, inserted, "Game collection seeded");

    Ok(Json(InsertedResponse {
        message: format!("Seeded {inserted} sample games"),
        inserted_count: inserted,
    }))
}

/// DELETE /api/cleanup
///
/// Remove every game.
pub async fn cleanup(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete_all().await?;

    tracing::info!(deleted, "Game collection cleared");

    Ok(Json(DeletedResponse {
        message: format!("Deleted {deleted} games"),
        deleted_count: deleted,
    }))
}
