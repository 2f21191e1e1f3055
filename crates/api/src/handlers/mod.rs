//! Request handlers.
//!
//! Each submodule provides async handler functions that validate input,
//! delegate to the [`GameStore`](backlog_db::GameStore) held in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod admin;
pub mod game;
pub mod pages;
