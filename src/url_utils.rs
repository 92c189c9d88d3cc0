//! URL utilities for metadata extraction.
//!
//! Canonical links and meta content frequently carry relative or malformed
//! URLs; these helpers validate, absolutize and take hosts apart so the
//! final record only ever exposes absolute URLs.

use url::Url;

/// Check whether a string is a valid absolute http(s) URL.
///
/// Returns the parse result alongside the verdict so callers that need the
/// parsed URL don't pay for a second parse.
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Resolve a possibly-relative URL against a base.
///
/// Absolute inputs are returned unchanged; unresolvable inputs are returned
/// as-is so the caller's absoluteness check decides their fate.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if is_absolute_url(url_str).0 {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Extract the host from an absolute URL, or an empty string.
#[must_use]
pub fn get_domain_url(url_str: &str) -> String {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if !is_abs {
        return String::new();
    }

    parsed
        .and_then(|url| url.host_str().map(ToString::to_string))
        .unwrap_or_default()
}

/// Extract the hostname from a URL for the metadata record.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let domain = get_domain_url(url_str);
    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

/// Parse a string into a `Url`, accepting only absolute http(s) URLs.
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    is_absolute_url(url_str).1
}
