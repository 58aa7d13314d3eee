//! Handler for the usage message served at `/`.

use axum::http::{HeaderMap, Uri, header};

/// Builds the usage message naming the add, delete and list routes.
///
/// Routes are prefixed with the request `Host` header, or the URI authority
/// (HTTP/2 `:authority`) when the header is missing.
pub fn welcome_handler(headers: &HeaderMap, uri: &Uri) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or_default();

    format!(
        "Welcome to shorty\n\n\
         To add a redirect GET to {host}/add/short=url\n\
         To delete GET to {host}/delete/short\n\
         Get a list of all redirects, GET to {host}/list"
    )
}
