//! Publication date extraction.
//!
//! Full publish-date parsing belongs to a dedicated library; this module
//! only defines the plug-in seam and the two cheap heuristics the pipeline
//! carries itself: the `og:published_time` meta tag and dated URL paths.

use chrono::{DateTime, NaiveDate};
use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::URL_DATE;
use crate::result::Metadata;
use crate::text_utils::normalize;
use crate::Options;

/// Pluggable publication-date extraction.
///
/// Implementations see the document, the record as filled so far (URL and
/// hostname in particular) and the caller options. Returning `None` leaves
/// the date field empty.
pub trait DateExtractor {
    /// Extract the publication date, if one can be determined.
    fn extract_date(&self, doc: &Document, metadata: &Metadata, opts: &Options)
        -> Option<NaiveDate>;
}

/// Built-in date heuristics: `og:published_time`, then a `/YYYY/MM/DD/`
/// segment in the document URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicDateExtractor;

impl DateExtractor for HeuristicDateExtractor {
    fn extract_date(
        &self,
        doc: &Document,
        metadata: &Metadata,
        opts: &Options,
    ) -> Option<NaiveDate> {
        for node in doc.select(r#"meta[property="og:published_time"]"#).nodes() {
            let content =
                normalize(&dom::get_attribute(&Selection::from(node.clone()), "content").unwrap_or_default());
            if let Some(date) = parse_date_value(&content) {
                return Some(date);
            }
        }

        let url = metadata.url.as_deref().or(opts.url.as_deref())?;
        date_from_url_path(url)
    }
}

/// Parse a date value as `YYYY-MM-DD` or an RFC 3339 timestamp.
#[must_use]
pub fn parse_date_value(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    None
}

/// Infer a date from a `/YYYY/MM/DD/` segment in a URL path.
///
/// Calendar validation rejects lookalike segments such as `/2020/99/99/`.
#[must_use]
pub fn date_from_url_path(url: &str) -> Option<NaiveDate> {
    let caps = URL_DATE.captures(url)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_date_value("2017-09-01"), NaiveDate::from_ymd_opt(2017, 9, 1));
        assert_eq!(
            parse_date_value("2020-01-20T10:30:00+01:00"),
            NaiveDate::from_ymd_opt(2020, 1, 20)
        );
        assert_eq!(parse_date_value("not a date"), None);
    }

    #[test]
    fn url_path_inference() {
        assert_eq!(
            date_from_url_path("https://example.org/2017/09/01/content.html"),
            NaiveDate::from_ymd_opt(2017, 9, 1)
        );
        assert_eq!(date_from_url_path("https://example.org/2017/99/99/x.html"), None);
        assert_eq!(date_from_url_path("https://example.org/about/"), None);
    }

    #[test]
    fn meta_tag_beats_url_path() {
        let doc = dom::parse(
            r#"<html><head><meta property="og:published_time" content="2017-09-01"/></head></html>"#,
        );
        let metadata = Metadata {
            url: Some("https://example.org/2020/01/01/post/".to_string()),
            ..Metadata::default()
        };

        let date = HeuristicDateExtractor.extract_date(&doc, &metadata, &Options::default());
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 9, 1));
    }

    #[test]
    fn falls_back_to_url_path() {
        let doc = dom::parse("<html><head></head></html>");
        let metadata = Metadata {
            url: Some("https://example.org/2017/09/01/content.html".to_string()),
            ..Metadata::default()
        };

        let date = HeuristicDateExtractor.extract_date(&doc, &metadata, &Options::default());
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 9, 1));
    }
}
