//! Client side of the game backlog.
//!
//! [`BacklogClient`] speaks the HTTP API; [`InlineEditor`] drives the
//! inline-edit state machine from `backlog_core` against it, and
//! [`BacklogPage`] handles the list-level actions around it.

pub mod api;
pub mod backlog;
pub mod editor;
pub mod error;

pub use api::{BacklogClient, CreateGameRequest, GameView};
pub use backlog::{AddGameForm, BacklogActions, BacklogPage, ListEffect, NoticeBoard};
pub use editor::{FieldUpdater, InlineEditor, PendingSave, SaveOutcome};
pub use error::ClientError;
