//! Process-local backend for [`GameStore`].
//!
//! Used by the test suites and when the server runs without `MONGO_URI`.
//! Mirrors the MongoDB backend's semantics: ids are fresh ObjectIds and
//! listing is newest first.

use async_trait::async_trait;
use backlog_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::game::{Game, NewGame, UpdateGame};
use crate::repositories::GameStore;

/// Game store holding documents in insertion order.
#[derive(Default)]
pub struct MemoryGameStore {
    games: RwLock<Vec<Game>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn insert(&self, game: NewGame) -> Result<Game, StoreError> {
        let game = game.with_id(DbId::new());
        self.games.write().await.push(game.clone());
        Ok(game)
    }

    async fn find_all(&self) -> Result<Vec<Game>, StoreError> {
        let games = self.games.read().await;
        Ok(games.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Game>, StoreError> {
        let games = self.games.read().await;
        Ok(games.iter().find(|g| g.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: DbId,
        update: &UpdateGame,
    ) -> Result<Option<Game>, StoreError> {
        let mut games = self.games.write().await;
        Ok(games.iter_mut().find(|g| g.id == id).map(|game| {
            game.apply(update);
            game.clone()
        }))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        let mut games = self.games.write().await;
        let before = games.len();
        games.retain(|g| g.id != id);
        Ok(games.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut games = self.games.write().await;
        let removed = games.len() as u64;
        games.clear();
        Ok(removed)
    }

    async fn insert_many(&self, new_games: Vec<NewGame>) -> Result<u64, StoreError> {
        let mut games = self.games.write().await;
        let count = new_games.len() as u64;
        games.extend(new_games.into_iter().map(|g| g.with_id(DbId::new())));
        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
