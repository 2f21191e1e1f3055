//! REST client for the backlog HTTP endpoints.
//!
//! Wraps `/api/games`, `/api/seed`, `/api/cleanup` and `/api/health` using
//! [`reqwest`].

use backlog_core::game::GameField;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// A game as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameView {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub platform: String,
    pub status: String,
    pub notes: String,
}

impl GameView {
    pub fn field(&self, field: GameField) -> &str {
        match field {
            GameField::Title => &self.title,
            GameField::Platform => &self.platform,
            GameField::Status => &self.status,
            GameField::Notes => &self.notes,
        }
    }
}

/// Body of `POST /api/games`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGameRequest {
    pub title: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Response of `POST /api/games`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGame {
    pub message: String,
    pub game_id: String,
    pub game: GameView,
}

/// Response of `POST /api/seed`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inserted {
    pub message: String,
    pub inserted_count: u64,
}

/// Response of `DELETE /api/games/{id}` and `DELETE /api/cleanup`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    pub message: String,
    pub deleted_count: u64,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: String,
    pub version: String,
    pub store_healthy: bool,
}

/// HTTP client for one backlog server.
#[derive(Clone)]
pub struct BacklogClient {
    client: reqwest::Client,
    base_url: String,
}

impl BacklogClient {
    /// Create a client for a server.
    ///
    /// * `base_url` - e.g. `http://localhost:3000`, without a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        Self::parse_response(response).await
    }

    pub async fn create_game(&self, game: &CreateGameRequest) -> Result<CreatedGame, ClientError> {
        let response = self
            .client
            .post(self.url("/api/games"))
            .json(game)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn list_games(&self) -> Result<Vec<GameView>, ClientError> {
        let response = self.client.get(self.url("/api/games")).send().await?;
        Self::parse_response(response).await
    }

    pub async fn get_game(&self, id: &str) -> Result<GameView, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/games/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Send a partial update. `fields` maps field names to new values; an
    /// empty map leaves the game unchanged.
    pub async fn update_game(
        &self,
        id: &str,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<GameView, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/games/{id}")))
            .json(fields)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Update exactly one field.
    pub async fn update_field(
        &self,
        id: &str,
        field: GameField,
        value: &str,
    ) -> Result<GameView, ClientError> {
        let mut fields = serde_json::Map::new();
        fields.insert(field.as_str().to_string(), value.into());
        self.update_game(id, &fields).await
    }

    pub async fn delete_game(&self, id: &str) -> Result<Deleted, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/games/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Replace all games with the server's sample set.
    pub async fn seed(&self) -> Result<Inserted, ClientError> {
        let response = self.client.post(self.url("/api/seed")).send().await?;
        Self::parse_response(response).await
    }

    /// Delete every game.
    pub async fn cleanup(&self) -> Result<Deleted, ClientError> {
        let response = self.client.delete(self.url("/api/cleanup")).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`ClientError::Api`], preferring the
    /// server's `error` message over the raw body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
