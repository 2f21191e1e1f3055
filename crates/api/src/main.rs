use std::net::SocketAddr;
use std::sync::Arc;

use backlog_db::{MemoryGameStore, StoreHandle, UnavailableStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backlog_api::config::{ServerConfig, StoreConfig};
use backlog_api::router::build_app_router;
use backlog_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backlog_api=debug,backlog_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        static_dir = %config.static_dir.display(),
        "Loaded server configuration"
    );

    // --- Store ---
    let store = init_store(&config.store).await;

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Build the store once at startup.
///
/// Store problems never stop the process: an unreachable MongoDB is logged
/// and requests fail individually, and a malformed URI installs an
/// [`UnavailableStore`] so static pages keep working.
async fn init_store(config: &StoreConfig) -> StoreHandle {
    let Some(uri) = config.mongo_uri.as_deref() else {
        tracing::warn!("MONGO_URI not set, using in-memory game store");
        return Arc::new(MemoryGameStore::new());
    };

    match backlog_db::connect(uri, &config.database, &config.collection).await {
        Ok(store) => {
            match backlog_db::health_check(&store).await {
                Ok(()) => tracing::info!(
                    database = %config.database,
                    collection = %config.collection,
                    "Connected to MongoDB"
                ),
                Err(err) => tracing::error!(error = %err, "MongoDB ping failed"),
            }
            Arc::new(store)
        }
        Err(err) => {
            tracing::error!(error = %err, "MongoDB connection error");
            Arc::new(UnavailableStore::new(err.to_string()))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
