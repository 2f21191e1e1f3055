use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the browser UI assets (default: `public`).
    pub static_dir: PathBuf,
    /// Document store settings.
    pub store: StoreConfig,
}

/// Where game documents live.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string. `None` selects the in-memory backend.
    pub mongo_uri: Option<String>,
    /// Database name (default: `backlog`).
    pub database: String,
    /// Collection name (default: `games`).
    pub collection: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `public`                   |
    /// | `MONGO_URI`            | unset (in-memory store)    |
    /// | `MONGO_DB`             | `backlog`                  |
    /// | `MONGO_COLLECTION`     | `games`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            store: StoreConfig::from_env(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let mongo_uri = std::env::var("MONGO_URI")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            mongo_uri,
            database: std::env::var("MONGO_DB").unwrap_or_else(|_| "backlog".into()),
            collection: std::env::var("MONGO_COLLECTION").unwrap_or_else(|_| "games".into()),
        }
    }
}
