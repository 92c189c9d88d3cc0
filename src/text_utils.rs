//! String utilities shared across the extraction pipeline.
//!
//! Metadata values arrive with arbitrary whitespace, so every value passes
//! through [`normalize`] before classification or comparison.

/// Collapse all runs of whitespace into single spaces and trim the ends.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count whitespace-separated words.
#[must_use]
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Uppercase the first letter of every word, leaving the rest untouched.
///
/// A word starts after any character that is not alphanumeric or an
/// apostrophe, so hyphenated names keep each part capitalized
/// ("jean-pierre" becomes "Jean-Pierre") while contractions survive
/// ("it's" becomes "It's").
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for c in s.chars() {
        if at_boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !c.is_alphanumeric() && c != '\'';
    }
    out
}
