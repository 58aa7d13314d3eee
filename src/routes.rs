//! Top-level router configuration.
//!
//! # Route Structure
//!
//! All requests go to [`route_handler`], which reads the operation from the
//! path:
//!
//! - `GET /`                   - Usage message
//! - `GET /add/{short}={url}`  - Add or update a redirect
//! - `GET /delete/{short}`     - Remove a redirect
//! - `GET /list`               - Dump the redirect file
//! - `GET /{short}`            - Redirect
//!
//! Paths are not normalized: a trailing slash can be part of a destination.

use crate::api::handlers::route_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(route_handler)
        .with_state(state)
        .layer(tracing::layer())
}
