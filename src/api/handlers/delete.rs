//! Handler for removing a redirect.

use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Removes `short`. Removing an unknown name succeeds.
///
/// # Endpoint
///
/// `GET /delete/{short}`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the redirect file could not be
/// written.
pub async fn delete_handler(state: &AppState, short: &str) -> Result<String, AppError> {
    match state.redirect_service.remove_redirect(short).await {
        Ok(()) => {
            let reply = format!("Successfully deleted redirect {short}");
            info!("{}", reply);
            Ok(reply)
        }
        Err(e) => {
            let reply = format!("Failed removing redirect {short}, {e}");
            error!("{}", reply);
            Err(AppError::internal(reply))
        }
    }
}
