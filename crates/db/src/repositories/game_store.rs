use async_trait::async_trait;
use backlog_core::types::DbId;

use crate::error::StoreError;
use crate::models::game::{Game, NewGame, UpdateGame};

/// Storage contract for game documents.
///
/// Misses are values, not errors: `find_by_id` and `update_by_id` return
/// `None` and `delete_by_id` returns `false` when no document has the id.
/// Every [`StoreError`] is a backend fault.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert a game and return it with its store-assigned id.
    async fn insert(&self, game: NewGame) -> Result<Game, StoreError>;

    /// All games, newest first.
    async fn find_all(&self) -> Result<Vec<Game>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Game>, StoreError>;

    /// Set the fields present in `update` and return the document after
    /// the update. An empty update returns the document unchanged.
    async fn update_by_id(&self, id: DbId, update: &UpdateGame)
        -> Result<Option<Game>, StoreError>;

    /// Delete one game. Returns `true` if it existed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError>;

    /// Delete every game. Returns the number removed.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Insert several games without validation. Returns the number inserted.
    async fn insert_many(&self, games: Vec<NewGame>) -> Result<u64, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
