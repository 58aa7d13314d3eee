//! Classification of raw request targets into redirect operations.
//!
//! Every request lands on a single fallback handler, so the path itself
//! carries the operation:
//!
//! | Target                 | Operation                      |
//! |------------------------|--------------------------------|
//! | `/`                    | [`RouteRequest::Welcome`]      |
//! | `/add/<short>=<dest>`  | [`RouteRequest::Add`]          |
//! | `/delete/<short>`      | [`RouteRequest::Remove`]       |
//! | `/list...`             | [`RouteRequest::List`]         |
//! | `/<short>`             | [`RouteRequest::Redirect`]     |
//!
//! Prefixes are case-sensitive and checked in that order. Paths are not
//! percent-decoded, so `/a%20b` looks up the short name `a%20b`.
//!
//! # Add parsing
//!
//! The add target is parsed in two stages:
//!
//! 1. strip the `/add/` prefix
//! 2. split the remainder on the **first** `=` only
//!
//! The left side is the short name and must be a single, non-empty path
//! segment. The right side is kept verbatim up to the end of the request
//! target, so a destination may carry its own `/`, `=` and query string:
//!
//! ```text
//! /add/s=example.com/a?b=c=d   ->  short "s", destination "example.com/a?b=c=d"
//! /add/s/t=example.com         ->  malformed (no `=` in the first segment)
//! /add/no-equals               ->  malformed
//! ```

/// Prefix of the add operation.
pub const ADD_PREFIX: &str = "/add/";

/// Prefix of the remove operation.
pub const DELETE_PREFIX: &str = "/delete/";

/// Prefix of the listing operation.
pub const LIST_PREFIX: &str = "/list";

/// A request path that does not match the shape its prefix requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid add format, use /add/from=to")]
    MalformedAdd,

    #[error("Invalid delete format, use /delete/short")]
    MalformedDelete,
}

/// Operation requested by a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRequest<'a> {
    Welcome,
    Add { short: &'a str, destination: &'a str },
    Remove { short: &'a str },
    List,
    Redirect { short: &'a str },
}

impl<'a> RouteRequest<'a> {
    /// Classifies a request target (path plus optional query string).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when an add or delete target is malformed.
    pub fn parse(target: &'a str) -> Result<Self, RouteError> {
        let path = target.split_once('?').map_or(target, |(path, _)| path);

        if path == "/" {
            return Ok(Self::Welcome);
        }

        if path.starts_with(ADD_PREFIX) {
            // The destination runs to the end of the target, query included.
            return parse_add(&target[ADD_PREFIX.len()..]);
        }

        if path.starts_with(DELETE_PREFIX) {
            return parse_delete(path);
        }

        if path.starts_with(LIST_PREFIX) {
            return Ok(Self::List);
        }

        // Short names are matched as they arrive, without percent-decoding.
        Ok(Self::Redirect {
            short: path.strip_prefix('/').unwrap_or(path),
        })
    }
}

fn parse_add(rest: &str) -> Result<RouteRequest<'_>, RouteError> {
    let (short, destination) = rest.split_once('=').ok_or(RouteError::MalformedAdd)?;

    if short.is_empty() || short.contains(['/', '?']) || destination.is_empty() {
        return Err(RouteError::MalformedAdd);
    }

    Ok(RouteRequest::Add { short, destination })
}

fn parse_delete(path: &str) -> Result<RouteRequest<'_>, RouteError> {
    match path.split('/').nth(2) {
        Some(short) if !short.is_empty() => Ok(RouteRequest::Remove { short }),
        _ => Err(RouteError::MalformedDelete),
    }
}
