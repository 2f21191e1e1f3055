pub mod admin;
pub mod games;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                   service and store health
///
/// /games                    list, create
/// /games/{id}               get, update, delete
///
/// /seed                     replace contents with sample games (POST)
/// /cleanup                  remove all games (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/games", games::router())
        .merge(admin::router())
}
