//! Entry point for every request.

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::api::handlers::{
    add_handler, delete_handler, list_handler, redirect_handler, welcome_handler,
};
use crate::domain::route_request::RouteRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Classifies the request target and dispatches to the matching handler.
///
/// Installed as the router fallback: the operation is encoded in the path
/// (see [`RouteRequest`]), so no other routes are registered.
///
/// # Errors
///
/// Malformed add/delete targets are answered with 400 Bad Request.
pub async fn route_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());
    debug!("Got request for {}", target);

    let request = match RouteRequest::parse(target) {
        Ok(request) => request,
        Err(e) => {
            warn!("Could not parse {}: {}", target, e);
            return AppError::from(e).into_response();
        }
    };

    match request {
        RouteRequest::Welcome => welcome_handler(&headers, &uri).into_response(),
        RouteRequest::Add { short, destination } => {
            add_handler(&state, short, destination).await.into_response()
        }
        RouteRequest::Remove { short } => delete_handler(&state, short).await.into_response(),
        RouteRequest::List => list_handler(&state).await.into_response(),
        RouteRequest::Redirect { short } => redirect_handler(&state, short).await.into_response(),
    }
}
