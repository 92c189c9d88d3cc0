//! The metadata record produced by extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata extracted from an HTML document.
///
/// All fields are optional: a missing field stays `None` (or empty for the
/// list fields) rather than failing extraction. The record is filled
/// monotonically by the pipeline stages and returned as a plain value; it is
/// never mutated after extraction returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Page title.
    pub title: Option<String>,

    /// Author name(s), joined with `"; "` when several were found.
    pub author: Option<String>,

    /// Canonical URL of the document; always absolute when set.
    pub url: Option<String>,

    /// Hostname derived from the URL.
    pub hostname: Option<String>,

    /// Page description.
    pub description: Option<String>,

    /// Name of the publishing site.
    pub sitename: Option<String>,

    /// Publication date.
    pub date: Option<NaiveDate>,

    /// Content categories, in discovery order.
    pub categories: Vec<String>,

    /// Content tags, in discovery order.
    pub tags: Vec<String>,
}
