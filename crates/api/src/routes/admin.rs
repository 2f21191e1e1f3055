use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Unvalidated bulk operations, mounted directly under `/api`.
///
/// ```text
/// POST   /seed     -> seed
/// DELETE /cleanup  -> cleanup
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seed", post(admin::seed))
        .route("/cleanup", delete(admin::cleanup))
}
