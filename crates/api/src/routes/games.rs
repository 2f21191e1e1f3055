use axum::routing::get;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Game CRUD routes mounted at `/api/games`.
///
/// ```text
/// GET    /        -> list_games
/// POST   /        -> create_game
/// GET    /{id}    -> get_game
/// PUT    /{id}    -> update_game
/// DELETE /{id}    -> delete_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(game::list_games).post(game::create_game))
        .route(
            "/{id}",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        )
}
