//! Metadata extraction pipeline.
//!
//! Orchestrates the signal sources in priority order: OpenGraph and general
//! meta tags first, JSON-LD with its documented overrides second, DOM
//! heuristics for whatever is still blank, then a post-processing pass that
//! normalizes the sitename, derives the hostname and splits category and
//! tag lists.

pub mod date;
pub mod dom_extraction;
pub mod json_ld;
pub mod meta_tags;

use dom_query::Document;

use crate::patterns::{COMMA_SEPARATOR, SITENAME_FROM_URL};
use crate::result::Metadata;
use crate::text_utils::{normalize, title_case};
use crate::url_utils;
use crate::Options;

pub use date::{DateExtractor, HeuristicDateExtractor};
pub use dom_extraction::{
    extract_dom_author, extract_dom_categories, extract_dom_sitename, extract_dom_tags,
    extract_dom_title, extract_dom_url,
};
pub use json_ld::extract_json_ld;
pub use meta_tags::{examine_meta, extract_open_graph, is_valid_author};

/// Extract all metadata from a document using the built-in date heuristics.
#[must_use]
pub fn extract_metadata(doc: &Document, opts: &Options) -> Metadata {
    extract_metadata_with(doc, opts, &HeuristicDateExtractor)
}

/// Extract all metadata from a document with a caller-supplied date
/// extractor.
///
/// The extractor never fails: missing signals leave fields empty and the
/// record is always returned.
#[must_use]
pub fn extract_metadata_with(
    doc: &Document,
    opts: &Options,
    dates: &dyn DateExtractor,
) -> Metadata {
    // Meta tags seed the record, JSON-LD merges in with its overrides
    let metadata = meta_tags::examine_meta(doc, Metadata::default(), opts);
    let mut metadata = json_ld::extract_json_ld(doc, metadata, opts);

    // DOM heuristics fill the remaining blanks
    metadata = dom_extraction::extract_dom_title(doc, metadata, opts);
    metadata = dom_extraction::extract_dom_author(doc, metadata, opts);
    metadata = dom_extraction::extract_dom_url(doc, metadata, opts);

    if metadata.hostname.is_none() {
        if let Some(url) = &metadata.url {
            metadata.hostname = url_utils::extract_hostname(url);
        }
    }

    if metadata.date.is_none() {
        metadata.date = dates.extract_date(doc, &metadata, opts);
    }

    metadata = dom_extraction::extract_dom_sitename(doc, metadata, opts);
    metadata = dom_extraction::extract_dom_categories(doc, metadata, opts);
    metadata = dom_extraction::extract_dom_tags(doc, metadata, opts);

    // Post-processing
    metadata = post_process_metadata(metadata, opts);

    metadata
}

/// Normalize the assembled record: sitename capitalization and URL
/// fallback, category/tag splitting, author blacklist.
fn post_process_metadata(mut metadata: Metadata, opts: &Options) -> Metadata {
    // Sitename: strip a Twitter handle prefix, capitalize bare names
    if let Some(sitename) = metadata.sitename.take() {
        let sitename = sitename.strip_prefix('@').unwrap_or(&sitename).to_string();

        let needs_casing = !sitename.contains('.')
            && sitename.chars().next().is_some_and(|c| !c.is_uppercase());
        let sitename = if needs_casing { title_case(&sitename) } else { sitename };

        if !sitename.is_empty() {
            metadata.sitename = Some(sitename);
        }
    } else if let Some(url) = &metadata.url {
        // No sitename anywhere: take the domain out of the URL
        if let Some(caps) = SITENAME_FROM_URL.captures(url) {
            metadata.sitename = Some(caps[1].to_string());
        }
    }

    if !metadata.categories.is_empty() {
        metadata.categories = clean_cat_tags(metadata.categories);
    }
    if !metadata.tags.is_empty() {
        metadata.tags = clean_cat_tags(metadata.tags);
    }

    if let Some(author) = &metadata.author {
        if is_blacklisted_author(author, opts) {
            metadata.author = None;
        }
    }

    metadata
}

/// Fill a blank field with a non-empty value.
pub(crate) fn fill_if_empty(slot: &mut Option<String>, value: &str) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value.to_string());
    }
}

/// Split category/tag entries on commas and semicolons, normalizing each
/// piece and dropping empties.
fn clean_cat_tags(entries: Vec<String>) -> Vec<String> {
    let mut cleaned = Vec::new();
    for entry in entries {
        for item in COMMA_SEPARATOR.split(&entry) {
            let item = normalize(item);
            if !item.is_empty() {
                cleaned.push(item);
            }
        }
    }
    cleaned
}

/// Check an author name against the configured blacklist.
fn is_blacklisted_author(author: &str, opts: &Options) -> bool {
    let Some(blacklist) = &opts.author_blacklist else {
        return false;
    };

    let author = author.to_lowercase();
    blacklist
        .iter()
        .any(|blocked| author.contains(&blocked.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn empty_document_yields_empty_record() {
        let doc = dom::parse("<html><head></head><body></body></html>");
        let metadata = extract_metadata(&doc, &Options::default());
        assert_eq!(metadata, Metadata::default());
    }

    #[test]
    fn url_and_hostname_from_open_graph() {
        let doc = dom::parse(r#"<html><head><meta property="og:url" content="https://example.org"/></head></html>"#);
        let metadata = extract_metadata(&doc, &Options::default());

        assert_eq!(metadata.url.as_deref(), Some("https://example.org"));
        assert_eq!(metadata.hostname.as_deref(), Some("example.org"));
    }

    #[test]
    fn sitename_twitter_handle_is_stripped_and_cased() {
        let doc = dom::parse(r#"<html><head><meta name="twitter:site" content="@examplesite"/></head></html>"#);
        let metadata = extract_metadata(&doc, &Options::default());
        assert_eq!(metadata.sitename.as_deref(), Some("Examplesite"));
    }

    #[test]
    fn sitename_with_dot_keeps_casing() {
        let doc = dom::parse(r#"<html><head><meta property="og:site_name" content="example.org"/></head></html>"#);
        let metadata = extract_metadata(&doc, &Options::default());
        assert_eq!(metadata.sitename.as_deref(), Some("example.org"));
    }

    #[test]
    fn sitename_falls_back_to_url_domain() {
        let doc = dom::parse(
            r#"<html><head><meta property="og:url" content="https://www.example.org/article"/></head></html>"#,
        );
        let metadata = extract_metadata(&doc, &Options::default());
        assert_eq!(metadata.sitename.as_deref(), Some("example.org"));
    }

    #[test]
    fn categories_and_tags_are_split_and_trimmed() {
        let metadata = Metadata {
            categories: vec!["One, Two ;Three".to_string(), "  ".to_string()],
            tags: vec!["a;b".to_string()],
            ..Metadata::default()
        };

        let cleaned = post_process_metadata(metadata, &Options::default());
        assert_eq!(cleaned.categories, vec!["One", "Two", "Three"]);
        assert_eq!(cleaned.tags, vec!["a", "b"]);
    }

    #[test]
    fn blacklisted_author_is_removed() {
        let doc = dom::parse(r#"<html><head><meta name="author" content="Staff Writer"/></head></html>"#);
        let opts = Options {
            author_blacklist: Some(vec!["staff writer".to_string()]),
            ..Options::default()
        };

        let metadata = extract_metadata(&doc, &opts);
        assert!(metadata.author.is_none());
    }

    #[test]
    fn fill_if_empty_respects_existing_values() {
        let mut slot = None;
        fill_if_empty(&mut slot, "value");
        assert_eq!(slot.as_deref(), Some("value"));

        fill_if_empty(&mut slot, "other");
        assert_eq!(slot.as_deref(), Some("value"));

        let mut blank = None;
        fill_if_empty(&mut blank, "");
        assert!(blank.is_none());
    }

    #[test]
    fn custom_date_extractor_is_used() {
        struct FixedDate;
        impl DateExtractor for FixedDate {
            fn extract_date(
                &self,
                _doc: &Document,
                _metadata: &Metadata,
                _opts: &Options,
            ) -> Option<chrono::NaiveDate> {
                chrono::NaiveDate::from_ymd_opt(1999, 12, 31)
            }
        }

        let doc = dom::parse("<html><head></head><body></body></html>");
        let metadata = extract_metadata_with(&doc, &Options::default(), &FixedDate);
        assert_eq!(metadata.date, chrono::NaiveDate::from_ymd_opt(1999, 12, 31));
    }
}
