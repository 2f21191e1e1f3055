//! Game document model and request DTOs.

use backlog_core::error::CoreError;
use backlog_core::game::{self, GameField, SampleGame};
use backlog_core::types::DbId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored game document.
///
/// The id deserializes from a BSON ObjectId and serializes as a hex string,
/// which is the form the HTTP API and browser UI use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(
        rename = "_id",
        serialize_with = "bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    pub id: DbId,
    pub title: String,
    pub platform: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

fn default_status() -> String {
    game::STATUS_BACKLOG.to_string()
}

impl Game {
    /// Apply the fields present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: &UpdateGame) {
        for (field, value) in update.fields() {
            let slot = match field {
                GameField::Title => &mut self.title,
                GameField::Platform => &mut self.platform,
                GameField::Status => &mut self.status,
                GameField::Notes => &mut self.notes,
            };
            *slot = value.to_string();
        }
    }
}

// ---------------------------------------------------------------------------
// Insert document
// ---------------------------------------------------------------------------

/// A validated game ready for insertion. The store assigns `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGame {
    pub title: String,
    pub platform: String,
    pub status: String,
    pub notes: String,
}

impl NewGame {
    /// Attach the id the store assigned on insert.
    pub fn with_id(self, id: DbId) -> Game {
        Game {
            id,
            title: self.title,
            platform: self.platform,
            status: self.status,
            notes: self.notes,
        }
    }
}

impl From<&SampleGame> for NewGame {
    fn from(sample: &SampleGame) -> Self {
        Self {
            title: sample.title.to_string(),
            platform: sample.platform.to_string(),
            status: sample.status.to_string(),
            notes: sample.notes.to_string(),
        }
    }
}

/// The fixed seed set as insertable documents.
pub fn sample_games() -> Vec<NewGame> {
    game::SAMPLE_GAMES.iter().map(NewGame::from).collect()
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a game. Required fields are checked by [`Self::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGame {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl CreateGame {
    /// Check required fields and resolve defaults for the optional ones.
    pub fn validate(self) -> Result<NewGame, CoreError> {
        game::validate_required(self.title.as_deref(), self.platform.as_deref())?;

        let status = game::resolve_status(self.status.as_deref());
        let notes = game::resolve_notes(self.notes.as_deref());

        Ok(NewGame {
            title: self.title.unwrap_or_default(),
            platform: self.platform.unwrap_or_default(),
            status,
            notes,
        })
    }
}

/// DTO for partially updating a game. Absent (or `null`) fields are left
/// unchanged; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UpdateGame {
    /// An update touching exactly one field.
    pub fn single(field: GameField, value: impl Into<String>) -> Self {
        let mut update = Self::default();
        let value = Some(value.into());
        match field {
            GameField::Title => update.title = value,
            GameField::Platform => update.platform = value,
            GameField::Status => update.status = value,
            GameField::Notes => update.notes = value,
        }
        update
    }

    /// The fields present in this update, in document order.
    pub fn fields(&self) -> Vec<(GameField, &str)> {
        [
            (GameField::Title, &self.title),
            (GameField::Platform, &self.platform),
            (GameField::Status, &self.status),
            (GameField::Notes, &self.notes),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Reject present-but-blank values for required fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in self.fields() {
            game::validate_update_value(field, value)?;
        }
        Ok(())
    }
}
