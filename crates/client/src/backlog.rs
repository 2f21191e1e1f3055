//! List-level controller for the backlog page.
//!
//! Covers what surrounds the inline editors: loading the list, the add
//! form, per-card delete and the seed / cleanup buttons. Every action
//! returns the [`ListEffect`]s the view applies in order. Banner notices
//! replace one another, so the last one wins. Confirmation prompts stay in
//! the view.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use backlog_core::game::GameField;
use backlog_core::inline_edit::{EditEffect, GameCard, Notice, NoticeLevel, SaveIndicator};

use crate::api::{BacklogClient, CreateGameRequest, CreatedGame, Deleted, GameView, Inserted};
use crate::editor::card_for;
use crate::error::ClientError;

/// Info notice shown when the list comes back empty.
pub const EMPTY_LIST_MESSAGE: &str = "No games found. Try seeding the database!";

/// Warning shown when the add form is submitted without a title or platform.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide a Game Title and Platform.";

/// The list-level calls the page makes.
#[async_trait]
pub trait BacklogActions: Send + Sync {
    async fn list_games(&self) -> Result<Vec<GameView>, ClientError>;
    async fn create_game(&self, game: &CreateGameRequest) -> Result<CreatedGame, ClientError>;
    async fn delete_game(&self, id: &str) -> Result<Deleted, ClientError>;
    async fn seed(&self) -> Result<Inserted, ClientError>;
    async fn cleanup(&self) -> Result<Deleted, ClientError>;
}

#[async_trait]
impl BacklogActions for BacklogClient {
    async fn list_games(&self) -> Result<Vec<GameView>, ClientError> {
        BacklogClient::list_games(self).await
    }

    async fn create_game(&self, game: &CreateGameRequest) -> Result<CreatedGame, ClientError> {
        BacklogClient::create_game(self, game).await
    }

    async fn delete_game(&self, id: &str) -> Result<Deleted, ClientError> {
        BacklogClient::delete_game(self, id).await
    }

    async fn seed(&self) -> Result<Inserted, ClientError> {
        BacklogClient::seed(self).await
    }

    async fn cleanup(&self) -> Result<Deleted, ClientError> {
        BacklogClient::cleanup(self).await
    }
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    /// Show a banner notice.
    Notice(Notice),
    /// Replace the rendered list. An empty list shows the seeding hint.
    Render(Vec<GameView>),
    /// Clear the add-game form.
    ResetForm,
    /// Fade out and drop one card, without reloading the list.
    RemoveCard(String),
}

fn notice(level: NoticeLevel, message: impl Into<String>) -> ListEffect {
    ListEffect::Notice(Notice::new(level, message))
}

fn failure(action: &str, err: &ClientError) -> ListEffect {
    tracing::warn!(action, error = %err, "Backlog action failed");
    notice(NoticeLevel::Danger, err.notice_message())
}

/// The add form as typed. Values are trimmed before use.
#[derive(Debug, Clone, Default)]
pub struct AddGameForm {
    pub title: String,
    pub platform: String,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// The rendered list and the actions behind its buttons.
pub struct BacklogPage<A> {
    actions: A,
    cards: Vec<GameCard>,
}

impl<A: BacklogActions> BacklogPage<A> {
    pub fn new(actions: A) -> Self {
        Self {
            actions,
            cards: Vec::new(),
        }
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// Cards in display order (newest first).
    pub fn cards(&self) -> &[GameCard] {
        &self.cards
    }

    pub fn card_mut(&mut self, game_id: &str) -> Option<&mut GameCard> {
        self.cards.iter_mut().find(|c| c.game_id() == game_id)
    }

    /// Fetch the list and rebuild every card.
    pub async fn load(&mut self) -> Vec<ListEffect> {
        let games = match self.actions.list_games().await {
            Ok(games) => games,
            Err(err) => {
                tracing::warn!(error = %err, "Loading games failed");
                return vec![notice(
                    NoticeLevel::Danger,
                    format!("Error loading games: {err}"),
                )];
            }
        };

        self.cards = games.iter().map(card_for).collect();

        let message = if games.is_empty() {
            EMPTY_LIST_MESSAGE.to_string()
        } else {
            format!("Loaded {} game(s). Click any field to edit!", games.len())
        };
        vec![
            ListEffect::Render(games),
            notice(NoticeLevel::Info, message),
        ]
    }

    /// Submit the add form. A missing title or platform is rejected here
    /// without a request.
    pub async fn add(&mut self, form: &AddGameForm) -> Vec<ListEffect> {
        let title = form.title.trim();
        let platform = form.platform.trim();
        let status = form.status.trim();

        if title.is_empty() || platform.is_empty() {
            return vec![notice(NoticeLevel::Warning, MISSING_FIELDS_MESSAGE)];
        }

        let request = CreateGameRequest {
            title: title.to_string(),
            platform: platform.to_string(),
            status: (!status.is_empty()).then(|| status.to_string()),
            notes: None,
        };

        if let Err(err) = self.actions.create_game(&request).await {
            return vec![failure("create", &err)];
        }

        let mut effects = vec![
            notice(
                NoticeLevel::Success,
                format!("Game \"{title}\" added successfully!"),
            ),
            ListEffect::ResetForm,
        ];
        effects.extend(self.load().await);
        effects
    }

    /// Delete one game and drop its card. The rest of the list is kept
    /// as rendered.
    pub async fn delete(&mut self, game_id: &str, title: &str) -> Vec<ListEffect> {
        if let Err(err) = self.actions.delete_game(game_id).await {
            return vec![failure("delete", &err)];
        }

        self.cards.retain(|c| c.game_id() != game_id);
        vec![
            notice(NoticeLevel::Success, format!("Game \"{title}\" deleted.")),
            ListEffect::RemoveCard(game_id.to_string()),
        ]
    }

    /// Replace the collection with the sample set, then reload.
    pub async fn seed(&mut self) -> Vec<ListEffect> {
        let mut effects = vec![notice(NoticeLevel::Info, "Seeding database...")];
        match self.actions.seed().await {
            Ok(result) => {
                effects.push(notice(NoticeLevel::Success, result.message));
                effects.extend(self.load().await);
            }
            Err(err) => effects.push(failure("seed", &err)),
        }
        effects
    }

    /// Delete every game, then reload.
    pub async fn cleanup(&mut self) -> Vec<ListEffect> {
        let mut effects = vec![notice(NoticeLevel::Info, "Cleaning database...")];
        match self.actions.cleanup().await {
            Ok(result) => {
                effects.push(notice(NoticeLevel::Success, result.message));
                effects.extend(self.load().await);
            }
            Err(err) => effects.push(failure("cleanup", &err)),
        }
        effects
    }
}

// ---------------------------------------------------------------------------
// Transient notices
// ---------------------------------------------------------------------------

/// What is on screen right now: at most one banner, plus a save indicator
/// per card field. Each expires after its own TTL.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    banner: Option<(Notice, Instant)>,
    indicators: HashMap<(String, GameField), (SaveIndicator, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a banner, replacing any current one.
    pub fn show(&mut self, notice: Notice, now: Instant) {
        self.banner = Some((notice, now));
    }

    pub fn show_indicator(
        &mut self,
        game_id: &str,
        field: GameField,
        indicator: SaveIndicator,
        now: Instant,
    ) {
        self.indicators
            .insert((game_id.to_string(), field), (indicator, now));
    }

    /// The banner still visible at `now`, if any.
    pub fn banner(&self, now: Instant) -> Option<&Notice> {
        self.banner
            .as_ref()
            .filter(|(notice, shown)| now.saturating_duration_since(*shown) < notice.ttl())
            .map(|(notice, _)| notice)
    }

    /// The indicator still visible next to a field at `now`, if any.
    pub fn indicator(&self, game_id: &str, field: GameField, now: Instant) -> Option<SaveIndicator> {
        self.indicators
            .get(&(game_id.to_string(), field))
            .filter(|(indicator, shown)| now.saturating_duration_since(*shown) < indicator.ttl())
            .map(|(indicator, _)| *indicator)
    }

    /// Record the notices among list effects.
    pub fn apply_list(&mut self, effects: &[ListEffect], now: Instant) {
        for effect in effects {
            if let ListEffect::Notice(notice) = effect {
                self.show(notice.clone(), now);
            }
        }
    }

    /// Record the notices and indicators produced by one field's editor.
    pub fn apply_edit(
        &mut self,
        game_id: &str,
        field: GameField,
        effects: &[EditEffect],
        now: Instant,
    ) {
        for effect in effects {
            match effect {
                EditEffect::Notice(notice) => self.show(notice.clone(), now),
                EditEffect::Indicator(indicator) => {
                    self.show_indicator(game_id, field, *indicator, now)
                }
                EditEffect::FocusAndSelect | EditEffect::SendUpdate { .. } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use assert_matches::assert_matches;

    use super::*;

    /// In-process stand-in for the HTTP API. `fail_with` turns every call
    /// into an API error with that message.
    #[derive(Default)]
    struct FakeActions {
        games: Mutex<Vec<GameView>>,
        calls: Mutex<Vec<&'static str>>,
        fail_with: Option<String>,
    }

    impl FakeActions {
        fn with_games(titles: &[&str]) -> Self {
            let fake = Self::default();
            for title in titles {
                fake.push(title, "PC");
            }
            fake
        }

        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Default::default()
            }
        }

        fn push(&self, title: &str, platform: &str) -> GameView {
            let mut games = self.games.lock().unwrap();
            let game = GameView {
                id: format!("{:024x}", games.len() + 1),
                title: title.to_string(),
                platform: platform.to_string(),
                status: "Backlog".to_string(),
                notes: String::new(),
            };
            games.insert(0, game.clone());
            game
        }

        fn record(&self, call: &'static str) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(call);
            match &self.fail_with {
                Some(message) => Err(ClientError::Api {
                    status: 500,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BacklogActions for FakeActions {
        async fn list_games(&self) -> Result<Vec<GameView>, ClientError> {
            self.record("list")?;
            Ok(self.games.lock().unwrap().clone())
        }

        async fn create_game(&self, game: &CreateGameRequest) -> Result<CreatedGame, ClientError> {
            self.record("create")?;
            let game = self.push(&game.title, &game.platform);
            Ok(CreatedGame {
                message: "Game created".into(),
                game_id: game.id.clone(),
                game,
            })
        }

        async fn delete_game(&self, id: &str) -> Result<Deleted, ClientError> {
            self.record("delete")?;
            self.games.lock().unwrap().retain(|g| g.id != id);
            Ok(Deleted {
                message: "Game deleted".into(),
                deleted_count: 1,
            })
        }

        async fn seed(&self) -> Result<Inserted, ClientError> {
            self.record("seed")?;
            self.games.lock().unwrap().clear();
            self.push("Hades", "PC");
            self.push("Celeste", "PC");
            Ok(Inserted {
                message: "Seeded 2 sample games".into(),
                inserted_count: 2,
            })
        }

        async fn cleanup(&self) -> Result<Deleted, ClientError> {
            self.record("cleanup")?;
            let mut games = self.games.lock().unwrap();
            let deleted = games.len() as u64;
            games.clear();
            Ok(Deleted {
                message: format!("Deleted {deleted} games"),
                deleted_count: deleted,
            })
        }
    }

    fn notices(effects: &[ListEffect]) -> Vec<(NoticeLevel, &str)> {
        effects
            .iter()
            .filter_map(|e| match e {
                ListEffect::Notice(n) => Some((n.level, n.message.as_str())),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn empty_list_shows_seeding_hint() {
        let mut page = BacklogPage::new(FakeActions::default());
        let effects = page.load().await;

        assert_eq!(effects[0], ListEffect::Render(Vec::new()));
        assert_eq!(notices(&effects), vec![(NoticeLevel::Info, EMPTY_LIST_MESSAGE)]);
        assert!(page.cards().is_empty());
    }

    #[tokio::test]
    async fn loaded_list_reports_count_and_builds_cards() {
        let mut page = BacklogPage::new(FakeActions::with_games(&["Hades", "Celeste"]));
        let effects = page.load().await;

        assert_eq!(
            notices(&effects),
            vec![(NoticeLevel::Info, "Loaded 2 game(s). Click any field to edit!")]
        );
        assert_eq!(page.cards().len(), 2);
        let title = page.cards()[0].editor(GameField::Title).unwrap();
        assert_eq!(title.displayed_value(), "Celeste");
    }

    #[tokio::test]
    async fn load_failure_shows_danger_notice() {
        let mut page = BacklogPage::new(FakeActions::failing("store down"));
        let effects = page.load().await;

        assert_matches!(
            effects.as_slice(),
            [ListEffect::Notice(n)] if n.level == NoticeLevel::Danger && n.message.starts_with("Error loading games:")
        );
    }

    #[tokio::test]
    async fn add_without_platform_warns_and_sends_nothing() {
        let mut page = BacklogPage::new(FakeActions::default());
        let form = AddGameForm {
            title: "Hades".into(),
            platform: "   ".into(),
            ..Default::default()
        };

        let effects = page.add(&form).await;

        assert_eq!(notices(&effects), vec![(NoticeLevel::Warning, MISSING_FIELDS_MESSAGE)]);
        assert!(page.actions().calls().is_empty());
    }

    #[tokio::test]
    async fn add_resets_form_and_reloads() {
        let mut page = BacklogPage::new(FakeActions::default());
        let form = AddGameForm {
            title: " Hades ".into(),
            platform: "PC".into(),
            status: String::new(),
        };

        let effects = page.add(&form).await;

        assert_eq!(
            effects[0],
            ListEffect::Notice(Notice::new(NoticeLevel::Success, "Game \"Hades\" added successfully!"))
        );
        assert_eq!(effects[1], ListEffect::ResetForm);
        assert_eq!(page.actions().calls(), vec!["create", "list"]);
        assert_eq!(page.cards().len(), 1);
    }

    #[tokio::test]
    async fn add_failure_reports_server_message() {
        let mut page = BacklogPage::new(FakeActions::failing("Title and Platform are required"));
        let form = AddGameForm {
            title: "Hades".into(),
            platform: "PC".into(),
            ..Default::default()
        };

        let effects = page.add(&form).await;

        assert_eq!(
            notices(&effects),
            vec![(NoticeLevel::Danger, "Error: Title and Platform are required")]
        );
        assert!(!effects.contains(&ListEffect::ResetForm));
    }

    #[tokio::test]
    async fn delete_drops_card_without_reloading() {
        let mut page = BacklogPage::new(FakeActions::with_games(&["Hades", "Celeste"]));
        page.load().await;
        let id = page.cards()[0].game_id().to_string();

        let effects = page.delete(&id, "Celeste").await;

        assert_eq!(
            effects,
            vec![
                ListEffect::Notice(Notice::new(NoticeLevel::Success, "Game \"Celeste\" deleted.")),
                ListEffect::RemoveCard(id.clone()),
            ]
        );
        assert_eq!(page.cards().len(), 1);
        assert!(page.card_mut(&id).is_none());
        assert_eq!(page.actions().calls(), vec!["list", "delete"]);
    }

    #[tokio::test]
    async fn seed_reports_progress_then_reloads() {
        let mut page = BacklogPage::new(FakeActions::default());
        let effects = page.seed().await;

        assert_eq!(
            notices(&effects),
            vec![
                (NoticeLevel::Info, "Seeding database..."),
                (NoticeLevel::Success, "Seeded 2 sample games"),
                (NoticeLevel::Info, "Loaded 2 game(s). Click any field to edit!"),
            ]
        );
        assert_eq!(page.cards().len(), 2);
    }

    #[tokio::test]
    async fn cleanup_failure_keeps_list() {
        let mut page = BacklogPage::new(FakeActions::failing("The game store failed"));
        let effects = page.cleanup().await;

        assert_eq!(
            notices(&effects),
            vec![
                (NoticeLevel::Info, "Cleaning database..."),
                (NoticeLevel::Danger, "Error: The game store failed"),
            ]
        );
        assert_eq!(page.actions().calls(), vec!["cleanup"]);
    }

    #[tokio::test]
    async fn cleanup_ends_on_empty_hint() {
        let mut page = BacklogPage::new(FakeActions::with_games(&["Hades"]));
        let effects = page.cleanup().await;

        assert_eq!(notices(&effects).last(), Some(&(NoticeLevel::Info, EMPTY_LIST_MESSAGE)));
        assert!(page.cards().is_empty());
    }

    #[test]
    fn banner_expires_and_is_replaced() {
        let mut board = NoticeBoard::new();
        let start = Instant::now();

        board.apply_list(
            &[
                notice(NoticeLevel::Info, "Seeding database..."),
                notice(NoticeLevel::Success, "Seeded 5 sample games"),
            ],
            start,
        );

        assert_eq!(board.banner(start).unwrap().message, "Seeded 5 sample games");
        assert!(board.banner(start + Duration::from_secs(4)).is_some());
        assert!(board.banner(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn indicators_are_per_field_and_short_lived() {
        let mut board = NoticeBoard::new();
        let start = Instant::now();
        let effects = [
            EditEffect::Indicator(SaveIndicator::Success),
            EditEffect::Notice(Notice::new(NoticeLevel::Success, "Title updated successfully!")),
        ];

        board.apply_edit("a", GameField::Title, &effects, start);

        assert_eq!(
            board.indicator("a", GameField::Title, start),
            Some(SaveIndicator::Success)
        );
        assert_eq!(board.indicator("a", GameField::Status, start), None);
        assert_eq!(board.indicator("a", GameField::Title, start + Duration::from_secs(2)), None);
        assert!(board.banner(start + Duration::from_secs(2)).is_some());
    }
}
