#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use backlog_db::{MemoryGameStore, StoreHandle};
use http_body_util::BodyExt;
use tower::ServiceExt;

use backlog_api::config::{ServerConfig, StoreConfig};
use backlog_api::router::build_app_router;
use backlog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(static_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir,
        store: StoreConfig {
            mongo_uri: None,
            database: "backlog".to_string(),
            collection: "games".to_string(),
        },
    }
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_app_with(store: StoreHandle, static_dir: PathBuf) -> Router {
    let config = test_config(static_dir);
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Router over a shared in-memory store. Clone the store to build several
/// apps that see the same data.
pub fn build_test_app(store: Arc<MemoryGameStore>) -> Router {
    build_app_with(store, PathBuf::from("public"))
}

pub fn new_store() -> Arc<MemoryGameStore> {
    Arc::new(MemoryGameStore::new())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Create a game through the API and return its id.
pub async fn create_game(store: &Arc<MemoryGameStore>, body: serde_json::Value) -> String {
    let response = post_json(build_test_app(store.clone()), "/api/games", body).await;
    let json = body_json(response).await;
    json["gameId"].as_str().unwrap().to_string()
}
