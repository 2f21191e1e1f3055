use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use backlog_core::error::CoreError;
use backlog_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for backend
/// faults. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `backlog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A fault in the game store backend.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::InvalidIdentifier(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_ID", msg.clone())
                }
            },

            // --- Store faults ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "The game store failed to complete the request".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
