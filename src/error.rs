//! Error types shared across layers.
//!
//! - [`StoreError`] - the redirect file could not be read, parsed or written
//! - [`AppError`] - what a request handler reports back to the client
//!
//! Malformed request paths are reported by
//! [`crate::domain::route_request::RouteError`] and converted into
//! [`AppError::BadRequest`] at the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;

use crate::domain::route_request::RouteError;

/// Persistence failure of the redirect store.
///
/// Fatal while loading the store at startup, reported-but-continuing for
/// writes that happen while serving requests.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unable to read the redirect file {}, {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse contents of redirect file {}, {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to marshal the current redirects to JSON, {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to write the redirect file {}, {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned by request handlers.
///
/// Rendered as a plain-text body with the matching status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        };

        (status, message).into_response()
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        AppError::bad_request(e.to_string())
    }
}
