//! Response bodies for the game endpoints.
//!
//! Read and update endpoints return the game document itself (or an array
//! of them). Writes that need a confirmation use the types below so every
//! handler serializes the same field names.

use backlog_db::models::game::Game;
use serde::Serialize;

/// `201` body for `POST /api/games`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGameResponse {
    pub message: &'static str,
    pub game_id: String,
    pub game: Game,
}

/// Body for bulk inserts (`POST /api/seed`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedResponse {
    pub message: String,
    pub inserted_count: u64,
}

/// Body for deletes (`DELETE /api/games/{id}`, `DELETE /api/cleanup`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub message: String,
    pub deleted_count: u64,
}
