use std::sync::Arc;

use backlog_db::StoreHandle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Game store, built once at startup.
    pub store: StoreHandle,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
