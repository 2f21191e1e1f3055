//! MongoDB backend for [`GameStore`].
//!
//! Documents live in a single collection (default `backlog.games`). Listing
//! sorts by `_id` descending, which is insertion order for ObjectIds
//! generated by the driver.

use async_trait::async_trait;
use backlog_core::types::DbId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::error::StoreError;
use crate::models::game::{Game, NewGame, UpdateGame};
use crate::repositories::GameStore;

/// Game store backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoGameStore {
    database: Database,
    games: Collection<Game>,
}

impl MongoGameStore {
    pub fn new(database: Database, collection: &str) -> Self {
        let games = database.collection::<Game>(collection);
        Self { database, games }
    }

    fn inserts(&self) -> Collection<NewGame> {
        self.games.clone_with_type::<NewGame>()
    }
}

/// Build the `$set` document for the fields present in `update`.
fn set_document(update: &UpdateGame) -> Document {
    let mut set = Document::new();
    for (field, value) in update.fields() {
        set.insert(field.as_str(), value);
    }
    doc! { "$set": set }
}

#[async_trait]
impl GameStore for MongoGameStore {
    async fn insert(&self, game: NewGame) -> Result<Game, StoreError> {
        let result = self.inserts().insert_one(&game).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))?;
        Ok(game.with_id(id))
    }

    async fn find_all(&self) -> Result<Vec<Game>, StoreError> {
        let cursor = self.games.find(doc! {}).sort(doc! { "_id": -1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Game>, StoreError> {
        Ok(self.games.find_one(doc! { "_id": id }).await?)
    }

    async fn update_by_id(
        &self,
        id: DbId,
        update: &UpdateGame,
    ) -> Result<Option<Game>, StoreError> {
        if update.is_empty() {
            tracing::debug!(game_id = %id, "Empty update, reading game unchanged");
            return self.find_by_id(id).await;
        }

        Ok(self
            .games
            .find_one_and_update(doc! { "_id": id }, set_document(update))
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        let result = self.games.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = self.games.delete_many(doc! {}).await?;
        tracing::debug!(deleted = result.deleted_count, "Deleted all games");
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, games: Vec<NewGame>) -> Result<u64, StoreError> {
        if games.is_empty() {
            tracing::debug!("insert_many called with no games, skipping");
            return Ok(0);
        }
        let result = self.inserts().insert_many(&games).await?;
        let inserted = result.inserted_ids.len() as u64;
        tracing::debug!(inserted, "Inserted games");
        Ok(inserted)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
