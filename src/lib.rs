//! # metasift
//!
//! Metadata extraction from noisy HTML pages.
//!
//! This library turns an arbitrary web page into a canonical metadata
//! record: title, author, URL, hostname, description, sitename, date,
//! categories and tags. Signals are read from OpenGraph tags, JSON-LD
//! schema graphs, Dublin Core and itemprop attributes, generic `<meta>`
//! tags, DOM heuristics and the URL itself, then merged under fixed
//! precedence rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use metasift::extract;
//!
//! let html = r#"<html><head>
//!     <meta property="og:title" content="My Article"/>
//!     <meta property="og:site_name" content="My Site"/>
//! </head><body></body></html>"#;
//!
//! let metadata = extract(html);
//! assert_eq!(metadata.title.as_deref(), Some("My Article"));
//! assert_eq!(metadata.sitename.as_deref(), Some("My Site"));
//! ```
//!
//! ## Design
//!
//! - **Total**: extraction never fails; missing signals leave fields empty.
//! - **Pure**: no I/O, no logging, no shared mutable state. Concurrent
//!   calls on distinct documents are safe; regexes and selector tables are
//!   compiled once and shared process-wide.
//! - **Pluggable dates**: full publish-date parsing is left to a dedicated
//!   library via the [`DateExtractor`] trait; the built-in heuristics cover
//!   `og:published_time` and dated URL paths.

mod options;
mod patterns;
mod result;

/// Read-only DOM adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding for byte input.
pub mod encoding;

/// The metadata extraction pipeline.
pub mod metadata;

/// CSS selector tables for DOM metadata extraction.
pub mod selector;

/// String utilities shared across the pipeline.
pub mod text_utils;

/// URL validation, resolution and host extraction.
pub mod url_utils;

// Public API - re-exports
pub use metadata::{DateExtractor, HeuristicDateExtractor};
pub use options::Options;
pub use result::Metadata;

/// Extract metadata from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// let html = r#"<html><head><title>Test Title</title></head></html>"#;
/// let metadata = metasift::extract(html);
/// assert_eq!(metadata.title.as_deref(), Some("Test Title"));
/// ```
#[must_use]
pub fn extract(html: &str) -> Metadata {
    extract_with_options(html, &Options::default())
}

/// Extract metadata from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use metasift::{extract_with_options, Options};
///
/// let html = r#"<html><head><link rel="canonical" href="/article"/></head></html>"#;
/// let options = Options {
///     url: Some("https://example.org/".to_string()),
///     ..Options::default()
/// };
///
/// let metadata = extract_with_options(html, &options);
/// assert_eq!(metadata.url.as_deref(), Some("https://example.org/article"));
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> Metadata {
    let doc = dom::parse(html);
    metadata::extract_metadata(&doc, options)
}

/// Extract metadata with a caller-supplied [`DateExtractor`].
#[must_use]
pub fn extract_with_date_extractor(
    html: &str,
    options: &Options,
    dates: &dyn DateExtractor,
) -> Metadata {
    let doc = dom::parse(html);
    metadata::extract_metadata_with(&doc, options, dates)
}

/// Extract metadata from HTML bytes with automatic encoding detection.
///
/// The charset is detected from the byte order mark or meta declarations
/// and the payload transcoded to UTF-8 before extraction; invalid
/// sequences are replaced rather than rejected.
#[must_use]
pub fn extract_bytes(html: &[u8]) -> Metadata {
    extract_bytes_with_options(html, &Options::default())
}

/// Extract metadata from HTML bytes with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Metadata {
    let html = encoding::decode_html(html);
    extract_with_options(&html, options)
}
