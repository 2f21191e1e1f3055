//! Inline-edit state machine for game fields.
//!
//! Each editable field of a game card runs its own [`FieldEditor`]:
//!
//! ```text
//! Display --Click--> Editing --Commit--> Saving --SaveSucceeded--> Display(new)
//!                       |                   \----SaveFailed-----> Display(prior)
//!                       \--Cancel--> Display(prior)
//! ```
//!
//! The machine is pure: [`FieldEditor::handle`] returns the [`EditEffect`]s a
//! view or network driver must carry out, and never performs I/O itself.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::game::GameField;

/// How long a banner notice stays visible before auto-dismissal.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// How long a per-field save indicator stays visible.
pub const INDICATOR_TTL: Duration = Duration::from_secs(2);

/// Warning shown when an edit is committed with an empty value.
pub const EMPTY_VALUE_MESSAGE: &str = "Value cannot be empty";

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// A transient, auto-dismissed user notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn ttl(&self) -> Duration {
        NOTICE_TTL
    }
}

/// Per-field tick/cross shown next to a field after a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveIndicator {
    Success,
    Failure,
}

impl SaveIndicator {
    pub fn ttl(self) -> Duration {
        INDICATOR_TTL
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// Showing the stored value.
    Display { value: String },
    /// An input holds `draft`; `original` is restored on cancel or failure.
    Editing { original: String, draft: String },
    /// A partial update for `pending` is in flight.
    Saving { original: String, pending: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// The field was clicked.
    Click,
    /// The input text changed.
    Input(String),
    /// The input lost focus or Enter was pressed.
    Commit,
    /// Escape was pressed.
    Cancel,
    /// The update request completed successfully.
    SaveSucceeded,
    /// The update request was rejected or never reached the server. Carries
    /// the full text of the danger notice to show.
    SaveFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEffect {
    /// Focus the freshly created input and pre-select its text.
    FocusAndSelect,
    /// Send a single-field partial update.
    SendUpdate { field: GameField, value: String },
    /// Show a save indicator for [`INDICATOR_TTL`].
    Indicator(SaveIndicator),
    /// Show a banner notice for [`NOTICE_TTL`].
    Notice(Notice),
}

/// Edit state of one field on one game card.
#[derive(Debug, Clone)]
pub struct FieldEditor {
    field: GameField,
    state: EditState,
}

impl FieldEditor {
    pub fn new(field: GameField, value: impl Into<String>) -> Self {
        Self {
            field,
            state: EditState::Display {
                value: value.into(),
            },
        }
    }

    pub fn field(&self) -> GameField {
        self.field
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.state, EditState::Saving { .. })
    }

    /// The text the view should render for this field right now.
    pub fn displayed_value(&self) -> &str {
        match &self.state {
            EditState::Display { value } => value,
            EditState::Editing { draft, .. } => draft,
            EditState::Saving { pending, .. } => pending,
        }
    }

    /// Apply an event and return the effects to perform.
    ///
    /// Events that make no sense in the current state are ignored, so a
    /// click on a field that is already being edited and a blur that
    /// follows Enter are both no-ops.
    pub fn handle(&mut self, event: EditEvent) -> Vec<EditEffect> {
        let current = std::mem::replace(
            &mut self.state,
            EditState::Display {
                value: String::new(),
            },
        );

        let (next, effects) = match (current, event) {
            (EditState::Display { value }, EditEvent::Click) => (
                EditState::Editing {
                    draft: value.trim().to_string(),
                    original: value,
                },
                vec![EditEffect::FocusAndSelect],
            ),

            (EditState::Editing { original, .. }, EditEvent::Input(text)) => {
                (EditState::Editing { original, draft: text }, Vec::new())
            }

            (EditState::Editing { original, draft }, EditEvent::Commit) => {
                self.commit(original, draft)
            }

            (EditState::Editing { original, .. }, EditEvent::Cancel) => {
                (EditState::Display { value: original }, Vec::new())
            }

            (EditState::Saving { pending, .. }, EditEvent::SaveSucceeded) => {
                let notice = Notice::new(
                    NoticeLevel::Success,
                    format!("{} updated successfully!", self.field.label()),
                );
                (
                    EditState::Display { value: pending },
                    vec![
                        EditEffect::Indicator(SaveIndicator::Success),
                        EditEffect::Notice(notice),
                    ],
                )
            }

            (EditState::Saving { original, .. }, EditEvent::SaveFailed(message)) => (
                EditState::Display { value: original },
                vec![
                    EditEffect::Indicator(SaveIndicator::Failure),
                    EditEffect::Notice(Notice::new(NoticeLevel::Danger, message)),
                ],
            ),

            (state, _) => (state, Vec::new()),
        };

        self.state = next;
        effects
    }

    fn commit(&self, original: String, draft: String) -> (EditState, Vec<EditEffect>) {
        let value = draft.trim();

        if value.is_empty() {
            return (
                EditState::Display { value: original },
                vec![EditEffect::Notice(Notice::new(
                    NoticeLevel::Warning,
                    EMPTY_VALUE_MESSAGE,
                ))],
            );
        }

        // Stored values may carry padding; the input never does.
        if value == original.trim() {
            return (EditState::Display { value: original }, Vec::new());
        }

        let value = value.to_string();
        (
            EditState::Saving {
                original,
                pending: value.clone(),
            },
            vec![EditEffect::SendUpdate {
                field: self.field,
                value,
            }],
        )
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// The editable fields of one game, each with an independent editor.
#[derive(Debug, Clone)]
pub struct GameCard {
    game_id: String,
    editors: BTreeMap<GameField, FieldEditor>,
}

impl GameCard {
    pub fn new(
        game_id: impl Into<String>,
        fields: impl IntoIterator<Item = (GameField, String)>,
    ) -> Self {
        let editors = fields
            .into_iter()
            .map(|(field, value)| (field, FieldEditor::new(field, value)))
            .collect();
        Self {
            game_id: game_id.into(),
            editors,
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn editor(&self, field: GameField) -> Option<&FieldEditor> {
        self.editors.get(&field)
    }

    /// Route an event to one field. Fields not on the card ignore events.
    pub fn handle(&mut self, field: GameField, event: EditEvent) -> Vec<EditEffect> {
        match self.editors.get_mut(&field) {
            Some(editor) => editor.handle(event),
            None => Vec::new(),
        }
    }

    /// Fields currently showing an input.
    pub fn editing_fields(&self) -> Vec<GameField> {
        self.editors
            .values()
            .filter(|e| e.is_editing())
            .map(FieldEditor::field)
            .collect()
    }
}
