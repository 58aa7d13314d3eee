//! Redirect entity mapping a short name to its destination.

use crate::utils::url_normalizer::normalize_destination;

/// A short name and the destination it redirects to.
///
/// The destination is normalized on construction, so it always carries a
/// `scheme://` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub short: String,
    pub destination: String,
}

impl Redirect {
    /// Creates a redirect, normalizing the raw destination.
    pub fn new(short: impl Into<String>, destination: &str) -> Self {
        Self {
            short: short.into(),
            destination: normalize_destination(destination),
        }
    }
}
