//! Network driver for the inline-edit state machine.
//!
//! [`step`] applies an event to a [`GameCard`] and splits a requested save
//! off as a [`PendingSave`]. The save is sent without holding the card, so
//! several fields (or cards) can have requests in flight at once; each
//! outcome is fed back with [`complete`].
//! Requests are never cancelled or de-duplicated.

use async_trait::async_trait;
use backlog_core::game::GameField;
use backlog_core::inline_edit::{EditEffect, EditEvent, GameCard};

use crate::api::{BacklogClient, GameView};
use crate::error::ClientError;

/// Sends a single-field partial update.
#[async_trait]
pub trait FieldUpdater: Send + Sync {
    async fn update_field(
        &self,
        game_id: &str,
        field: GameField,
        value: &str,
    ) -> Result<(), ClientError>;
}

#[async_trait]
impl FieldUpdater for BacklogClient {
    async fn update_field(
        &self,
        game_id: &str,
        field: GameField,
        value: &str,
    ) -> Result<(), ClientError> {
        BacklogClient::update_field(self, game_id, field, value)
            .await
            .map(|_| ())
    }
}

/// A save requested by the state machine, not yet sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub game_id: String,
    pub field: GameField,
    pub value: String,
}

impl PendingSave {
    /// Send the update and translate the result into a state-machine event.
    pub async fn send<U: FieldUpdater + ?Sized>(self, updater: &U) -> SaveOutcome {
        let event = match updater
            .update_field(&self.game_id, self.field, &self.value)
            .await
        {
            Ok(()) => EditEvent::SaveSucceeded,
            Err(err) => {
                tracing::warn!(
                    game_id = %self.game_id,
                    field = %self.field,
                    error = %err,
                    "Inline edit save failed",
                );
                EditEvent::SaveFailed(err.notice_message())
            }
        };

        SaveOutcome {
            game_id: self.game_id,
            field: self.field,
            event,
        }
    }
}

/// The result of a [`PendingSave`], ready to feed back into its card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub game_id: String,
    pub field: GameField,
    pub event: EditEvent,
}

/// Build a card for the fields the UI lets users edit in place.
pub fn card_for(game: &GameView) -> GameCard {
    GameCard::new(
        game.id.clone(),
        [GameField::Title, GameField::Platform, GameField::Status]
            .into_iter()
            .map(|field| (field, game.field(field).to_string())),
    )
}

/// Apply `event` to one field. Returns the view effects and, when the
/// machine asked for a save, the request to send.
pub fn step(
    card: &mut GameCard,
    field: GameField,
    event: EditEvent,
) -> (Vec<EditEffect>, Option<PendingSave>) {
    let mut pending = None;
    let mut effects = Vec::new();

    for effect in card.handle(field, event) {
        match effect {
            EditEffect::SendUpdate { field, value } => {
                pending = Some(PendingSave {
                    game_id: card.game_id().to_string(),
                    field,
                    value,
                });
            }
            other => effects.push(other),
        }
    }

    (effects, pending)
}

/// Feed a save outcome back into its card. Outcomes for another card are
/// dropped.
pub fn complete(card: &mut GameCard, outcome: SaveOutcome) -> Vec<EditEffect> {
    if outcome.game_id != card.game_id() {
        return Vec::new();
    }
    card.handle(outcome.field, outcome.event)
}

/// Drives [`GameCard`]s against a [`FieldUpdater`].
pub struct InlineEditor<U> {
    updater: U,
}

impl<U: FieldUpdater> InlineEditor<U> {
    pub fn new(updater: U) -> Self {
        Self { updater }
    }

    pub fn updater(&self) -> &U {
        &self.updater
    }

    /// Send a pending save through this editor's updater.
    pub async fn send(&self, pending: PendingSave) -> SaveOutcome {
        pending.send(&self.updater).await
    }

    /// Apply an event and, if it triggers a save, send it and apply the
    /// outcome before returning. Effects come back in the order they
    /// happened.
    pub async fn dispatch(
        &self,
        card: &mut GameCard,
        field: GameField,
        event: EditEvent,
    ) -> Vec<EditEffect> {
        let (mut effects, pending) = step(card, field, event);
        if let Some(pending) = pending {
            let outcome = self.send(pending).await;
            effects.extend(complete(card, outcome));
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use backlog_core::inline_edit::{EditState, NoticeLevel, SaveIndicator};

    use super::*;

    /// Records calls; fails when the value is `"fail"`.
    #[derive(Default)]
    struct RecordingUpdater {
        calls: Mutex<Vec<(String, GameField, String)>>,
    }

    #[async_trait]
    impl FieldUpdater for RecordingUpdater {
        async fn update_field(
            &self,
            game_id: &str,
            field: GameField,
            value: &str,
        ) -> Result<(), ClientError> {
            self.calls
                .lock()
                .unwrap()
                .push((game_id.to_string(), field, value.to_string()));
            if value == "fail" {
                return Err(ClientError::Api {
                    status: 404,
                    message: "Game not found".into(),
                });
            }
            Ok(())
        }
    }

    fn card() -> GameCard {
        card_for(&GameView {
            id: "65f1c2a9e4b0a1b2c3d4e5f6".into(),
            title: "Hades".into(),
            platform: "PC".into(),
            status: "Backlog".into(),
            notes: "".into(),
        })
    }

    #[tokio::test]
    async fn dispatch_sends_one_request_and_applies_success() {
        let editor = InlineEditor::new(RecordingUpdater::default());
        let mut card = card();

        editor.dispatch(&mut card, GameField::Status, EditEvent::Click).await;
        editor
            .dispatch(&mut card, GameField::Status, EditEvent::Input("Playing".into()))
            .await;
        let effects = editor
            .dispatch(&mut card, GameField::Status, EditEvent::Commit)
            .await;

        assert_eq!(effects[0], EditEffect::Indicator(SaveIndicator::Success));
        assert_eq!(
            card.editor(GameField::Status).unwrap().state(),
            &EditState::Display { value: "Playing".into() }
        );
        let calls = editor.updater().calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![("65f1c2a9e4b0a1b2c3d4e5f6".to_string(), GameField::Status, "Playing".to_string())]
        );
    }

    #[tokio::test]
    async fn failed_save_reverts_and_reports_server_message() {
        let editor = InlineEditor::new(RecordingUpdater::default());
        let mut card = card();

        editor.dispatch(&mut card, GameField::Title, EditEvent::Click).await;
        editor
            .dispatch(&mut card, GameField::Title, EditEvent::Input("fail".into()))
            .await;
        let effects = editor
            .dispatch(&mut card, GameField::Title, EditEvent::Commit)
            .await;

        assert_eq!(card.editor(GameField::Title).unwrap().displayed_value(), "Hades");
        assert_matches!(
            &effects[1],
            EditEffect::Notice(n) if n.level == NoticeLevel::Danger && n.message == "Error: Game not found"
        );
    }

    #[tokio::test]
    async fn unchanged_and_empty_commits_never_reach_the_network() {
        let editor = InlineEditor::new(RecordingUpdater::default());
        let mut card = card();

        editor.dispatch(&mut card, GameField::Title, EditEvent::Click).await;
        editor.dispatch(&mut card, GameField::Title, EditEvent::Commit).await;

        editor.dispatch(&mut card, GameField::Platform, EditEvent::Click).await;
        editor
            .dispatch(&mut card, GameField::Platform, EditEvent::Input("  ".into()))
            .await;
        editor.dispatch(&mut card, GameField::Platform, EditEvent::Commit).await;

        editor.dispatch(&mut card, GameField::Status, EditEvent::Click).await;
        editor.dispatch(&mut card, GameField::Status, EditEvent::Cancel).await;

        assert!(editor.updater().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn saves_on_different_fields_run_concurrently() {
        let editor = InlineEditor::new(RecordingUpdater::default());
        let mut card = card();

        let mut pending = Vec::new();
        for (field, value) in [(GameField::Title, "Hades II"), (GameField::Status, "Playing")] {
            step(&mut card, field, EditEvent::Click);
            step(&mut card, field, EditEvent::Input(value.into()));
            let (_, save) = step(&mut card, field, EditEvent::Commit);
            pending.push(save.unwrap());
        }
        assert!(card.editor(GameField::Title).unwrap().is_saving());
        assert!(card.editor(GameField::Status).unwrap().is_saving());

        let outcomes =
            futures::future::join_all(pending.into_iter().map(|p| editor.send(p))).await;
        for outcome in outcomes.into_iter().rev() {
            complete(&mut card, outcome);
        }

        assert_eq!(card.editor(GameField::Title).unwrap().displayed_value(), "Hades II");
        assert_eq!(card.editor(GameField::Status).unwrap().displayed_value(), "Playing");
    }

    #[tokio::test]
    async fn unreachable_server_reports_network_error_once() {
        // Nothing listens on port 1.
        let editor = InlineEditor::new(BacklogClient::new("http://127.0.0.1:1"));
        let mut card = card();

        editor.dispatch(&mut card, GameField::Title, EditEvent::Click).await;
        editor
            .dispatch(&mut card, GameField::Title, EditEvent::Input("Hades II".into()))
            .await;
        let effects = editor
            .dispatch(&mut card, GameField::Title, EditEvent::Commit)
            .await;

        assert_eq!(effects[0], EditEffect::Indicator(SaveIndicator::Failure));
        assert_matches!(
            &effects[1],
            EditEffect::Notice(n) if n.message.starts_with("Network error: ")
        );
        assert_eq!(card.editor(GameField::Title).unwrap().displayed_value(), "Hades");
    }

    #[test]
    fn outcome_for_another_card_is_ignored() {
        let mut card = card();
        let outcome = SaveOutcome {
            game_id: "other".into(),
            field: GameField::Title,
            event: EditEvent::SaveSucceeded,
        };
        assert!(complete(&mut card, outcome).is_empty());
    }
}
