//! Relgraph Server
//!
//! HTTP front end for the query engine. Serves `GET /query?q=` and
//! `GET /health` over a relation store loaded once at startup.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use axum::Router as AxumRouter;
use config::ServerConfig;
use handlers::{create_router, AppState};
use relgraph_query::{QueryEngine, QueryError};
use relgraph_store::{RelationStore, StoreError};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Snapshot could not be loaded
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Query engine could not be built
    #[error("Query engine error: {0}")]
    Query(#[from] QueryError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application from configuration
///
/// A missing snapshot yields an empty store, so the server still starts and
/// answers every question with the no-data message.
pub fn build_app(config: &ServerConfig) -> Result<AxumRouter, ServerError> {
    let store = Arc::new(RelationStore::load_or_empty(&config.snapshot_path)?);
    info!(
        "Loaded {} triplets from {}",
        store.len(),
        config.snapshot_path.display()
    );

    let provider = config.llm.build_provider();
    let engine = QueryEngine::new(store, provider, config.query.clone())?;

    Ok(create_router(AppState::new(engine)))
}

/// Start the query HTTP server
///
/// Initializes logging, loads the snapshot, and serves until the process
/// is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // RUST_LOG overrides the default level
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    info!("Starting Relgraph query server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {} at {}", config.llm.model, config.llm.endpoint);

    let app = build_app(&config)?;

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
