use async_trait::async_trait;
use backlog_core::types::DbId;

use crate::error::StoreError;
use crate::models::game::{Game, NewGame, UpdateGame};
use crate::repositories::GameStore;

/// Stand-in installed when no backend could be built at startup.
///
/// The server still starts and serves static pages; every store call fails
/// with [`StoreError::Unavailable`], which the API reports as a 500.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        tracing::debug!(reason = %self.reason, "Store call rejected, no backend");
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl GameStore for UnavailableStore {
    async fn insert(&self, _game: NewGame) -> Result<Game, StoreError> {
        self.fail()
    }

    async fn find_all(&self) -> Result<Vec<Game>, StoreError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Game>, StoreError> {
        self.fail()
    }

    async fn update_by_id(
        &self,
        _id: DbId,
        _update: &UpdateGame,
    ) -> Result<Option<Game>, StoreError> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<bool, StoreError> {
        self.fail()
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        self.fail()
    }

    async fn insert_many(&self, _games: Vec<NewGame>) -> Result<u64, StoreError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.fail()
    }
}
