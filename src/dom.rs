//! Read-only DOM adapter over `dom_query`.
//!
//! The extractor treats the HTML tree as an immutable input: it looks up
//! attributes, reads text content and runs CSS selector queries, nothing
//! else. This module pins down exactly that surface.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get an attribute value, if present.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get the text content of a node and its descendants.
///
/// Returns `StrTendril` for zero-copy passing; convert only when owned
/// storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Query the first element matching a CSS selector.
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// Query all elements matching a CSS selector.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}
