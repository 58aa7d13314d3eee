//! Destination normalization.
//!
//! Destinations typed into a browser address bar tend to lose their scheme or
//! one of its slashes. Before a destination is stored it is brought into
//! `scheme://` form.

use url::Url;

/// Normalizes a destination to `scheme://...` form.
///
/// # Rules
///
/// 1. Contains `://`: unchanged
/// 2. Contains `:/` (a collapsed scheme separator): the first `:/` becomes `://`
/// 3. Otherwise: `http://` is prepended
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_destination("example.com"), "http://example.com");
/// assert_eq!(normalize_destination("https:/example.com"), "https://example.com");
/// assert_eq!(normalize_destination("ftp://example.com"), "ftp://example.com");
/// ```
pub fn normalize_destination(input: &str) -> String {
    if input.contains("://") {
        input.to_string()
    } else if input.contains(":/") {
        input.replacen(":/", "://", 1)
    } else {
        format!("http://{input}")
    }
}

/// Returns true if the destination parses as an absolute URL with a host.
///
/// Stored destinations are redirected to as-is; this check only feeds a
/// warning in the redirect handler.
pub fn is_redirectable(destination: &str) -> bool {
    Url::parse(destination).is_ok_and(|url| url.has_host())
}
