//! Handler for short name redirects.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::is_redirectable;

/// Redirects a short name to its destination.
///
/// # Endpoint
///
/// `GET /{short}`
///
/// Responds with 302 Found. The destination is sent as stored; one that does
/// not parse as an absolute URL is only logged.
///
/// # Errors
///
/// Returns 404 Not Found if the short name is unknown.
/// Returns 500 Internal Server Error if the lookup itself fails.
pub async fn redirect_handler(state: &AppState, short: &str) -> Result<Response, AppError> {
    let destination = state.redirect_service.resolve(short).await?;

    if !is_redirectable(&destination) {
        warn!("Redirecting {} to a malformed destination {}", short, destination);
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, destination)]).into_response())
}
