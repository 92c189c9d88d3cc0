//! Compiled regex patterns for metadata extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` and shared
//! process-wide. They are grouped by the pipeline stage that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Category / tag splitting
// =============================================================================

/// Splits category and tag entries on commas or semicolons.
pub static COMMA_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,;]\s*").expect("COMMA_SEPARATOR regex"));

// =============================================================================
// Title cleaning
// =============================================================================

/// Strips a trailing ` - Site Name` or ` | Site Name` tail from a `<title>`.
pub static TITLE_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(.+)?\s+[-|]\s+.*$").expect("TITLE_TAIL regex"));

// =============================================================================
// JSON-LD recovery
// =============================================================================

/// Detects unescaped JSON fragments leaking into string values.
pub static JSON_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[{\\}]").expect("JSON_SYMBOL regex"));

/// Recovers a `"name": "..."` value from a botched JSON string.
pub static NAME_IN_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)"name?\\?": ?\\?"([^"\\]+)"#).expect("NAME_IN_JSON regex"));

// =============================================================================
// Author cleaning
// =============================================================================

/// Strips a leading `by ` / `von ` byline prefix, with an optional
/// adjectival word in front of it ("posted by", "verfasst von").
pub static AUTHOR_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-zäöüß]+(ed|t))?\s?(by|von)\s").expect("AUTHOR_PREFIX regex")
});

/// Strips everything from the first digit onwards (dates, timestamps).
pub static AUTHOR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d.+?$").expect("AUTHOR_DIGITS regex"));

/// Strips trailing punctuation and dangling ` am` / ` on` date connectors.
pub static AUTHOR_TRAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^\w]+$|( am| on)").expect("AUTHOR_TRAIL regex"));

// =============================================================================
// URL handling
// =============================================================================

/// Accepts hrefs that carry a scheme or at least a path slash.
pub static URL_CHECK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://|/").expect("URL_CHECK regex"));

/// Finds a `scheme://host` prefix inside meta content values.
pub static DOMAIN_FINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^/]+").expect("DOMAIN_FINDER regex"));

/// Matches a `/YYYY/MM/DD/` segment in a URL path.
pub static URL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d{4})/(\d{2})/(\d{2})/").expect("URL_DATE regex"));

// =============================================================================
// Sitename recovery
// =============================================================================

/// Takes the site-name tail after a `-` or `|` separator in a `<title>`.
pub static SITENAME_FROM_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^.*?[-|]\s+(.*)$").expect("SITENAME_FROM_TITLE regex"));

/// Takes the registrable host out of a URL, skipping `www.` / `w1.` prefixes.
pub static SITENAME_FROM_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://(?:www\.|w[0-9]+\.)?([^/]+)").expect("SITENAME_FROM_URL regex")
});
