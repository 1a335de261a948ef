//! Drafter API server entry point.

use std::sync::Arc;

use drafter_api::config::ServerConfig;
use drafter_api::error::AppError;
use drafter_api::state::AppState;
use drafter_draft::store::InMemoryDraftRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Drafter API server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;
    tracing::info!(turn_policy = ?config.turn_policy, "configuration loaded");

    // Drafts live for the lifetime of the process.
    let repository = Arc::new(InMemoryDraftRepository::new());
    let app_state = AppState::new(repository, config.turn_policy);

    let app = drafter_api::app(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
