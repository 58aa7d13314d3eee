//! Handler for adding or updating a redirect.

use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Adds or updates `short` → `destination`.
///
/// # Endpoint
///
/// `GET /add/{short}={destination}`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the redirect file could not be
/// written. The redirect is served from memory regardless.
pub async fn add_handler(
    state: &AppState,
    short: &str,
    destination: &str,
) -> Result<String, AppError> {
    match state
        .redirect_service
        .add_redirect(short, destination)
        .await
    {
        Ok(redirect) => {
            let reply = format!(
                "Successfully added redirect {} -> {}",
                redirect.short, redirect.destination
            );
            info!("{}", reply);
            Ok(reply)
        }
        Err(e) => {
            let reply = format!("Failed adding redirect {short} -> {destination}, {e}");
            error!("{}", reply);
            Err(AppError::internal(reply))
        }
    }
}
