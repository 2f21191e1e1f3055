use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::pages;
use crate::state::AppState;

/// Browser-facing routes: the welcome page, the backlog UI and its assets.
///
/// ```text
/// GET /              -> welcome
/// GET /backlog       -> <static_dir>/game-CRUD.html
/// GET /gamelibrary   -> <static_dir>/game-CRUD.html
/// GET /*             -> files under <static_dir>
/// ```
pub fn router(static_dir: &Path) -> Router<AppState> {
    let backlog_page = static_dir.join(pages::BACKLOG_PAGE);

    Router::new()
        .route("/", get(pages::welcome))
        .route_service("/backlog", ServeFile::new(&backlog_page))
        .route_service("/gamelibrary", ServeFile::new(&backlog_page))
        .fallback_service(ServeDir::new(static_dir))
}
