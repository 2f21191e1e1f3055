//! Handlers for the `/api/games` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use backlog_core::error::CoreError;
use backlog_core::types::{parse_id, DbId};
use backlog_db::models::game::{CreateGame, UpdateGame};

use crate::error::{AppError, AppResult};
use crate::response::{CreatedGameResponse, DeletedResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Game", id })
}

/// POST /api/games
///
/// Create a game. `title` and `platform` are required; `status` defaults to
/// `Backlog` and `notes` to the empty string.
pub async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGame>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let new_game = input.validate()?;

    let game = state.store.insert(new_game).await?;

    tracing::info!(game_id = %game.id, title = %game.title, "Game created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedGameResponse {
            message: "Game created",
            game_id: game.id.to_hex(),
            game,
        }),
    ))
}

/// GET /api/games
///
/// List every game, newest first.
pub async fn list_games(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = state.store.find_all().await?;
    Ok(Json(games))
}

/// GET /api/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;

    let game = state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(Json(game))
}

/// PUT /api/games/{id}
///
/// Partially update a game. Only the fields present in the body change; an
/// empty body returns the game unchanged.
pub async fn update_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateGame>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let Json(input) = payload?;
    input.validate()?;

    let game = state
        .store
        .update_by_id(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    let fields: Vec<_> = input.fields().into_iter().map(|(f, _)| f.as_str()).collect();
    tracing::info!(game_id = %id, ?fields, "Game updated");

    Ok(Json(game))
}

/// DELETE /api/games/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;

    if !state.store.delete_by_id(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(game_id = %id, "Game deleted");

    Ok(Json(DeletedResponse {
        message: "Game deleted".to_string(),
        deleted_count: 1,
    }))
}
