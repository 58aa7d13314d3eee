//! Handler for dumping the persisted redirects.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Returns the redirect file exactly as it is on disk.
///
/// # Endpoint
///
/// `GET /list`
///
/// # Errors
///
/// Returns 400 Bad Request with the underlying error if the file cannot be
/// read, e.g. before the first redirect was ever added.
pub async fn list_handler(state: &AppState) -> Result<Response, AppError> {
    let contents = state
        .redirect_service
        .list_redirects()
        .await
        .map_err(|e| {
            warn!("Could not list redirects {}", e);
            AppError::bad_request(e.to_string())
        })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], contents).into_response())
}
