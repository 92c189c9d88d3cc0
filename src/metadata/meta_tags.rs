//! HTML meta-tag extraction.
//!
//! Scans `<meta>` elements and classifies each by its `property`, `name` or
//! `itemprop` attribute (first one present wins). The OpenGraph pass runs
//! first and seeds the record; the general scan then fills the remaining
//! blanks and collects tags.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::JSON_SYMBOL;
use crate::result::Metadata;
use crate::text_utils::normalize;
use crate::url_utils;
use crate::Options;

use super::fill_if_empty;

/// Meta `name` values mapped to the author field.
const META_NAME_AUTHOR: &[&str] = &["author", "byl", "dc.creator", "dcterms.creator", "sailthru.author"];

/// Meta `name` values mapped to the title field.
const META_NAME_TITLE: &[&str] = &[
    "title",
    "dc.title",
    "dcterms.title",
    "fb_title",
    "sailthru.title",
    "twitter:title",
];

/// Meta `name` values mapped to the description field.
const META_NAME_DESCRIPTION: &[&str] = &[
    "description",
    "dc.description",
    "dcterms.description",
    "dc:description",
    "sailthru.description",
    "twitter:description",
];

/// Meta `name` values mapped to the sitename field.
const META_NAME_PUBLISHER: &[&str] = &["copyright", "dc.publisher", "dcterms.publisher", "publisher"];

/// Examine `<meta>` tags for metadata.
///
/// Seeds the record from OpenGraph, then scans every meta element with a
/// non-empty `content` attribute. Scalar fields only fill blanks, so the
/// OpenGraph values keep precedence; tags accumulate across sources.
#[must_use]
pub fn examine_meta(doc: &Document, original: Metadata, opts: &Options) -> Metadata {
    // Bootstrap from OpenGraph tags
    let mut result = extract_open_graph(doc, original);

    // Sitename candidate from twitter:site and friends, used only if
    // nothing better turns up by the end of the scan.
    let mut deferred_sitename: Option<String> = None;

    for node in doc.select("meta[content]").nodes() {
        let meta = Selection::from(node.clone());

        let content = normalize(&dom::get_attribute(&meta, "content").unwrap_or_default());
        if content.is_empty() {
            continue;
        }

        // Handle property attribute
        let property = normalize(&dom::get_attribute(&meta, "property").unwrap_or_default());
        if !property.is_empty() {
            if property.starts_with("og:") {
                // Already handled by the OpenGraph pass
            } else if property == "article:tag" {
                result.tags.push(content);
            } else if property == "author" || property == "article:author" {
                fill_if_empty(&mut result.author, &content);
            }
            continue;
        }

        // Handle name attribute
        let name = normalize(&dom::get_attribute(&meta, "name").unwrap_or_default()).to_lowercase();
        if !name.is_empty() {
            if META_NAME_AUTHOR.contains(&name.as_str()) {
                fill_if_empty(&mut result.author, &content);
            } else if META_NAME_TITLE.contains(&name.as_str()) {
                fill_if_empty(&mut result.title, &content);
            } else if META_NAME_DESCRIPTION.contains(&name.as_str()) {
                fill_if_empty(&mut result.description, &content);
            } else if META_NAME_PUBLISHER.contains(&name.as_str()) {
                fill_if_empty(&mut result.sitename, &content);
            } else if name == "twitter:site"
                || name == "application-name"
                || name.contains("twitter:app:name")
            {
                deferred_sitename = Some(content);
            } else if name == "twitter:url" {
                if result.url.is_none() && url_utils::is_absolute_url(&content).0 {
                    result.url = Some(content);
                }
            } else if name == "twitter:creator" && opts.twitter_creator_author {
                fill_if_empty(&mut result.author, &content);
            } else if name == "keywords" {
                result.tags.push(content);
            }
            continue;
        }

        // Handle itemprop attribute
        let itemprop = normalize(&dom::get_attribute(&meta, "itemprop").unwrap_or_default());
        if !itemprop.is_empty() {
            match itemprop.as_str() {
                "author" => fill_if_empty(&mut result.author, &content),
                "description" => fill_if_empty(&mut result.description, &content),
                "headline" => fill_if_empty(&mut result.title, &content),
                _ => {}
            }
        }
    }

    // Use the deferred sitename candidate if nothing better was found
    if result.sitename.is_none() {
        result.sitename = deferred_sitename;
    }

    // Clean up author
    result.author = result.author.take().filter(|author| is_valid_author(author));

    result
}

/// Extract metadata declared through OpenGraph `<meta property="og:*">` tags.
///
/// This is the first pass over the document, so recognized keys write
/// unconditionally.
#[must_use]
pub fn extract_open_graph(doc: &Document, original: Metadata) -> Metadata {
    let mut result = original;

    for node in doc.select(r#"meta[property^="og:"]"#).nodes() {
        let meta = Selection::from(node.clone());

        let property = normalize(&dom::get_attribute(&meta, "property").unwrap_or_default());
        let content = normalize(&dom::get_attribute(&meta, "content").unwrap_or_default());
        if content.is_empty() {
            continue;
        }

        match property.as_str() {
            "og:site_name" => result.sitename = Some(content),
            "og:title" => result.title = Some(content),
            "og:description" => result.description = Some(content),
            "og:author" | "og:article:author" => result.author = Some(content),
            "og:url" => {
                if url_utils::is_absolute_url(&content).0 {
                    result.url = Some(content);
                }
            }
            _ => {}
        }
    }

    result
}

/// Check that an author candidate plausibly names a person.
///
/// Rejects single tokens, URL leakage and strings carrying unescaped JSON
/// punctuation.
#[must_use]
pub fn is_valid_author(author: &str) -> bool {
    !author.is_empty()
        && author.contains(' ')
        && !author.starts_with("http")
        && !JSON_SYMBOL.is_match(author)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(html: &str) -> Metadata {
        let doc = dom::parse(html);
        examine_meta(&doc, Metadata::default(), &Options::default())
    }

    #[test]
    fn standard_name_meta_tags() {
        let metadata = scan(
            r#"<html><head>
                <meta name="author" content="Jenny Smith">
                <meta name="description" content="A test article.">
                <meta name="keywords" content="test, article">
            </head></html>"#,
        );

        assert_eq!(metadata.author.as_deref(), Some("Jenny Smith"));
        assert_eq!(metadata.description.as_deref(), Some("A test article."));
        assert_eq!(metadata.tags, vec!["test, article"]);
    }

    #[test]
    fn open_graph_tags_seed_the_record() {
        let metadata = scan(
            r#"<html><head>
                <meta property="og:title" content="Open Graph Title">
                <meta property="og:author" content="Jenny Smith">
                <meta property="og:description" content="An Open Graph description">
                <meta property="og:site_name" content="My first site">
                <meta property="og:url" content="https://example.org/test">
            </head></html>"#,
        );

        assert_eq!(metadata.title.as_deref(), Some("Open Graph Title"));
        assert_eq!(metadata.author.as_deref(), Some("Jenny Smith"));
        assert_eq!(metadata.description.as_deref(), Some("An Open Graph description"));
        assert_eq!(metadata.sitename.as_deref(), Some("My first site"));
        assert_eq!(metadata.url.as_deref(), Some("https://example.org/test"));
    }

    #[test]
    fn open_graph_rejects_relative_url() {
        let metadata = scan(r#"<meta property="og:url" content="/articles/test">"#);
        assert!(metadata.url.is_none());
    }

    #[test]
    fn open_graph_title_beats_name_title() {
        let metadata = scan(
            r#"<html><head>
                <meta name="title" content="Name Title">
                <meta property="og:title" content="OG Title">
            </head></html>"#,
        );
        assert_eq!(metadata.title.as_deref(), Some("OG Title"));
    }

    #[test]
    fn dublin_core_tags() {
        let metadata = scan(
            r#"<html><head>
                <meta name="DC.title" content="DC Title">
                <meta name="DC.creator" content="Jenny Smith">
                <meta name="dcterms.description" content="DC description">
                <meta name="dc.publisher" content="DC Publisher">
            </head></html>"#,
        );

        assert_eq!(metadata.title.as_deref(), Some("DC Title"));
        assert_eq!(metadata.author.as_deref(), Some("Jenny Smith"));
        assert_eq!(metadata.description.as_deref(), Some("DC description"));
        assert_eq!(metadata.sitename.as_deref(), Some("DC Publisher"));
    }

    #[test]
    fn itemprop_tags() {
        let metadata = scan(
            r#"<html><head>
                <meta itemprop="headline" content="Headline Title">
                <meta itemprop="author" content="Jenny Smith">
                <meta itemprop="description" content="Itemprop description">
            </head></html>"#,
        );

        assert_eq!(metadata.title.as_deref(), Some("Headline Title"));
        assert_eq!(metadata.author.as_deref(), Some("Jenny Smith"));
        assert_eq!(metadata.description.as_deref(), Some("Itemprop description"));
    }

    #[test]
    fn twitter_site_is_deferred_behind_publisher() {
        let metadata = scan(
            r#"<html><head>
                <meta name="twitter:site" content="@examplesite">
                <meta name="publisher" content="Example Publisher">
            </head></html>"#,
        );
        assert_eq!(metadata.sitename.as_deref(), Some("Example Publisher"));

        let metadata = scan(r#"<meta name="twitter:site" content="@examplesite">"#);
        assert_eq!(metadata.sitename.as_deref(), Some("@examplesite"));
    }

    #[test]
    fn twitter_url_fills_only_when_absolute() {
        let metadata = scan(r#"<meta name="twitter:url" content="https://example.org">"#);
        assert_eq!(metadata.url.as_deref(), Some("https://example.org"));

        let metadata = scan(r#"<meta name="twitter:url" content="/relative">"#);
        assert!(metadata.url.is_none());
    }

    #[test]
    fn twitter_creator_requires_opt_in() {
        let html = r#"<meta name="twitter:creator" content="Jenny Smith">"#;

        let doc = dom::parse(html);
        let metadata = examine_meta(&doc, Metadata::default(), &Options::default());
        assert!(metadata.author.is_none());

        let opts = Options { twitter_creator_author: true, ..Options::default() };
        let metadata = examine_meta(&doc, Metadata::default(), &opts);
        assert_eq!(metadata.author.as_deref(), Some("Jenny Smith"));
    }

    #[test]
    fn article_tags_accumulate() {
        let metadata = scan(
            r#"<html><head>
                <meta property="article:tag" content="rust">
                <meta property="article:tag" content="programming">
            </head></html>"#,
        );
        assert_eq!(metadata.tags, vec!["rust", "programming"]);
    }

    #[test]
    fn invalid_authors_are_dropped() {
        assert!(scan(r#"<meta name="author" content="single-token">"#).author.is_none());
        assert!(scan(r#"<meta name="author" content="https://example.org/jenny">"#)
            .author
            .is_none());
        assert!(scan(r#"<meta name="author" content="{&quot;name&quot;: &quot;x&quot;}">"#)
            .author
            .is_none());
    }

    #[test]
    fn is_valid_author_rules() {
        assert!(is_valid_author("Jenny Smith"));
        assert!(!is_valid_author("Jenny"));
        assert!(!is_valid_author("http://example.org Jenny"));
        assert!(!is_valid_author(r#"{"name": "Jenny Smith"}"#));
        assert!(!is_valid_author(""));
    }

    #[test]
    fn existing_fields_are_preserved() {
        let doc = dom::parse(r#"<meta name="author" content="New Author">"#);
        let original = Metadata {
            author: Some("Original Author".to_string()),
            ..Metadata::default()
        };

        let metadata = examine_meta(&doc, original, &Options::default());
        assert_eq!(metadata.author.as_deref(), Some("Original Author"));
    }
}
