//! HTTP server initialization and runtime setup.
//!
//! Loads the redirect store and runs the Axum server until Ctrl-C.

use crate::config::Config;
use crate::infrastructure::persistence::JsonFileRedirectRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The redirect file exists but cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = match JsonFileRedirectRepository::open(&config.redir_file).await {
        Ok(repository) => repository,
        Err(e) => {
            tracing::error!("Could not read redirect file, {}", e);
            return Err(e.into());
        }
    };

    let redir_file = repository.path().display().to_string();
    let state = AppState::new(Arc::new(repository));
    tracing::info!(
        "Starting with {} redirects from {}",
        state.redirect_service.count().await,
        redir_file
    );

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
