//! # shorty
//!
//! A small URL redirect service built with Axum. Short names map to
//! destination URLs; the mapping is kept in memory and mirrored to a JSON
//! file after every change.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Redirect entity, repository trait and request classification
//! - **Application Layer** ([`application`]) - Redirect use cases
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file storage
//! - **API Layer** ([`api`]) - Request handlers and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --redir-file redirs.json --port 8080
//!
//! curl localhost:8080/add/gh=github.com
//! curl -i localhost:8080/gh
//! curl localhost:8080/list
//! curl localhost:8080/delete/gh
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for flags and environment variables.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::RedirectService;
    pub use crate::domain::entities::Redirect;
    pub use crate::domain::repositories::RedirectRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::persistence::JsonFileRedirectRepository;
    pub use crate::state::AppState;
}
