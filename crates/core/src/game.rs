//! Game field names, status constants, and validation helpers.
//!
//! Shared by the store adapter (field names, seed data), the API layer
//! (request validation) and the inline-edit state machine (editable fields).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// A game that has not been started yet. Default status on create.
pub const STATUS_BACKLOG: &str = "Backlog";
/// A game currently being played.
pub const STATUS_PLAYING: &str = "Playing";
/// A game that has been finished.
pub const STATUS_COMPLETED: &str = "Completed";
/// A game that was dropped before finishing.
///
/// The status set is open-ended: values outside these four are stored as
/// sent.
pub const STATUS_ABANDONED: &str = "Abandoned";

/// Notes value used when a create request omits `notes`.
pub const DEFAULT_NOTES: &str = "";

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// The user-editable fields of a game document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameField {
    Title,
    Platform,
    Status,
    Notes,
}

impl GameField {
    pub const ALL: [GameField; 4] = [
        GameField::Title,
        GameField::Platform,
        GameField::Status,
        GameField::Notes,
    ];

    /// Document key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            GameField::Title => "title",
            GameField::Platform => "platform",
            GameField::Status => "status",
            GameField::Notes => "notes",
        }
    }

    /// Display label, e.g. `Title`.
    pub fn label(self) -> &'static str {
        match self {
            GameField::Title => "Title",
            GameField::Platform => "Platform",
            GameField::Status => "Status",
            GameField::Notes => "Notes",
        }
    }

    /// Whether the field must stay non-empty once stored.
    pub fn is_required(self) -> bool {
        matches!(self, GameField::Title | GameField::Platform)
    }
}

impl std::fmt::Display for GameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate the required fields of a create request.
///
/// Both `title` and `platform` must be present and non-empty after
/// trimming.
pub fn validate_required(title: Option<&str>, platform: Option<&str>) -> Result<(), CoreError> {
    let title_ok = title.is_some_and(|t| !is_blank(t));
    let platform_ok = platform.is_some_and(|p| !is_blank(p));
    if title_ok && platform_ok {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Title and Platform are required".to_string(),
        ))
    }
}

/// Validate a single field value supplied in a partial update.
///
/// Required fields may be omitted from an update but cannot be blanked.
pub fn validate_update_value(field: GameField, value: &str) -> Result<(), CoreError> {
    if field.is_required() && is_blank(value) {
        return Err(CoreError::Validation(format!(
            "{} cannot be empty",
            field.label()
        )));
    }
    Ok(())
}

/// Resolve the status of a new game, defaulting to [`STATUS_BACKLOG`].
pub fn resolve_status(status: Option<&str>) -> String {
    match status {
        Some(s) if !is_blank(s) => s.to_string(),
        _ => STATUS_BACKLOG.to_string(),
    }
}

/// Resolve the notes of a new game, defaulting to [`DEFAULT_NOTES`].
pub fn resolve_notes(notes: Option<&str>) -> String {
    notes.unwrap_or(DEFAULT_NOTES).to_string()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// A fixed sample entry inserted by the seed operation.
#[derive(Debug, Clone, Copy)]
pub struct SampleGame {
    pub title: &'static str,
    pub platform: &'static str,
    pub status: &'static str,
    pub notes: &'static str,
}

/// Sample set written by `POST /api/seed`. Not validated on insert.
pub const SAMPLE_GAMES: &[SampleGame] = &[
    SampleGame {
        title: "Hades",
        platform: "PC",
        status: STATUS_COMPLETED,
        notes: "Cleared Heat 8 with the Twin Fists",
    },
    SampleGame {
        title: "Hollow Knight",
        platform: "Nintendo Switch",
        status: STATUS_PLAYING,
        notes: "Stuck on the Mantis Lords",
    },
    SampleGame {
        title: "Elden Ring",
        platform: "PlayStation 5",
        status: STATUS_BACKLOG,
        notes: "",
    },
    SampleGame {
        title: "Disco Elysium",
        platform: "PC",
        status: STATUS_BACKLOG,
        notes: "Final Cut edition",
    },
    SampleGame {
        title: "Celeste",
        platform: "Xbox Series X",
        status: STATUS_ABANDONED,
        notes: "Chapter 7 was too much",
    },
];
