//! Entity store adapter for game documents.
//!
//! [`GameStore`] is the seam the HTTP layer talks to. The production backend
//! is MongoDB ([`MongoGameStore`]); [`MemoryGameStore`] backs tests and
//! runs without a configured database.

pub mod error;
pub mod models;
pub mod repositories;

use std::sync::Arc;

pub use error::StoreError;
pub use repositories::{GameStore, MemoryGameStore, MongoGameStore, UnavailableStore};

/// Shared, cheaply cloneable handle to the active store backend.
pub type StoreHandle = Arc<dyn GameStore>;

/// Connect to MongoDB and return a store bound to `database.collection`.
///
/// The driver connects lazily, so this only fails on a malformed URI or
/// unresolvable options. Use [`health_check`] to probe reachability.
pub async fn connect(
    uri: &str,
    database: &str,
    collection: &str,
) -> Result<MongoGameStore, StoreError> {
    let client = mongodb::Client::with_uri_str(uri).await?;
    Ok(MongoGameStore::new(client.database(database), collection))
}

/// Ping the store backend.
pub async fn health_check(store: &dyn GameStore) -> Result<(), StoreError> {
    store.ping().await
}
