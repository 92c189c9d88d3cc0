//! DOM-based metadata extraction.
//!
//! Fallback extractors that search the document body with CSS selector
//! batteries and structural heuristics. Each extractor runs only when its
//! field is still empty after the meta-tag and JSON-LD passes.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::{
    AUTHOR_DIGITS, AUTHOR_PREFIX, AUTHOR_TRAIL, DOMAIN_FINDER, SITENAME_FROM_TITLE, TITLE_TAIL,
    URL_CHECK,
};
use crate::result::Metadata;
use crate::selector;
use crate::text_utils::{normalize, title_case};
use crate::url_utils;
use crate::Options;

/// Upper bound on title text taken from DOM selectors, in characters.
const TITLE_RUNE_LIMIT: usize = 200;

/// Upper bound on author text taken from DOM selectors, in characters.
const AUTHOR_RUNE_LIMIT: usize = 75;

/// Scan a selector battery for the first node whose normalized text is
/// non-empty and under the character limit.
fn first_match_under_limit(doc: &Document, selectors: &[&str], limit: usize) -> Option<String> {
    for rule in selectors {
        for node in doc.select(rule).nodes() {
            let text = normalize(&dom::text_content(&Selection::from(node.clone())));
            if !text.is_empty() && text.chars().count() < limit {
                return Some(text);
            }
        }
    }
    None
}

// ============================================================
// TITLE
// ============================================================

/// Extract the title from heading elements, selector batteries or the
/// `<title>` element.
#[must_use]
pub fn extract_dom_title(doc: &Document, original: Metadata, _opts: &Options) -> Metadata {
    let mut result = original;

    if result.title.is_some() {
        return result;
    }

    // A unique <h1> is trusted outright
    let h1 = doc.select("h1");
    let h1_nodes = h1.nodes();
    if h1_nodes.len() == 1 {
        let text = normalize(&dom::text_content(&Selection::from(h1_nodes[0].clone())));
        if !text.is_empty() {
            result.title = Some(text);
        }
        return result;
    }

    if let Some(title) = first_match_under_limit(doc, selector::META_TITLE_SELECTORS, TITLE_RUNE_LIMIT)
    {
        result.title = Some(title);
        return result;
    }

    // <title> element, stripped of its trailing site name
    let head_title = doc.select("head > title");
    if let Some(node) = head_title.nodes().first() {
        let text = normalize(&dom::text_content(&Selection::from(node.clone())));
        let title = if let Some(caps) = TITLE_TAIL.captures(&text) {
            caps.get(1).map_or_else(String::new, |m| m.as_str().to_string())
        } else {
            text
        };

        if !title.is_empty() {
            result.title = Some(title);
        }
        return result;
    }

    // Last resorts: the first <h1> regardless of count, then the first <h2>
    if let Some(node) = h1_nodes.first() {
        let text = dom::text_content(&Selection::from(node.clone())).trim().to_string();
        if !text.is_empty() {
            result.title = Some(text);
        }
        return result;
    }

    let h2 = doc.select("h2");
    if let Some(node) = h2.nodes().first() {
        let text = dom::text_content(&Selection::from(node.clone())).trim().to_string();
        if !text.is_empty() {
            result.title = Some(text);
        }
    }

    result
}

// ============================================================
// AUTHOR
// ============================================================

/// Extract the author from byline elements found by the selector battery.
#[must_use]
pub fn extract_dom_author(doc: &Document, original: Metadata, _opts: &Options) -> Metadata {
    let mut result = original;

    if result.author.is_some() {
        return result;
    }

    if let Some(author) =
        first_match_under_limit(doc, selector::META_AUTHOR_SELECTORS, AUTHOR_RUNE_LIMIT)
    {
        let author = AUTHOR_PREFIX.replace_all(&author, "");
        let author = AUTHOR_DIGITS.replace_all(&author, "");
        let author = AUTHOR_TRAIL.replace_all(&author, "");
        let author = title_case(author.trim());

        if !author.is_empty() {
            result.author = Some(author);
        }
    }

    result
}

// ============================================================
// URL
// ============================================================

/// Extract the document URL from canonical or alternate links.
///
/// Root-relative hrefs are absolutized with a domain scraped from
/// `og:`/`twitter:` meta content, then against the default base URL. When
/// nothing yields an absolute URL the default base URL itself is used.
#[must_use]
pub fn extract_dom_url(doc: &Document, original: Metadata, opts: &Options) -> Metadata {
    let mut result = original;

    if result.url.is_some() {
        return result;
    }

    let mut url = String::new();

    let canonical = doc.select(r#"head link[rel="canonical"]"#);
    if let Some(node) = canonical.nodes().first() {
        let href = normalize(&dom::get_attribute(&Selection::from(node.clone()), "href").unwrap_or_default());
        if !href.is_empty() && URL_CHECK.is_match(&href) {
            url = href;
        }
    } else {
        // The default-language alternate declares the preferred URL
        for node in doc.select(r#"head link[rel="alternate"]"#).nodes() {
            let link = Selection::from(node.clone());
            if dom::get_attribute(&link, "hreflang").as_deref() != Some("x-default") {
                continue;
            }
            let href = normalize(&dom::get_attribute(&link, "href").unwrap_or_default());
            if !href.is_empty() && URL_CHECK.is_match(&href) {
                url = href;
            }
        }
    }

    // Root-relative canonical: borrow the domain from any og:/twitter: meta
    if url.starts_with('/') {
        for node in doc.select("head meta[content]").nodes() {
            let meta = Selection::from(node.clone());
            let name = normalize(&dom::get_attribute(&meta, "name").unwrap_or_default());
            let property = normalize(&dom::get_attribute(&meta, "property").unwrap_or_default());

            let attr_type = if name.is_empty() { property } else { name };
            if attr_type.is_empty() {
                continue;
            }

            if attr_type.starts_with("og:") || attr_type.starts_with("twitter:") {
                let content = normalize(&dom::get_attribute(&meta, "content").unwrap_or_default());
                if let Some(domain) = DOMAIN_FINDER.find(&content) {
                    url = format!("{}{}", domain.as_str(), url);
                    break;
                }
            }
        }
    }

    if !url.is_empty() {
        if url_utils::is_absolute_url(&url).0 {
            result.url = Some(url);
            return result;
        }

        if let Some(base) = opts.url.as_deref().and_then(url_utils::parse_url) {
            let resolved = url_utils::create_absolute_url(&url, &base);
            if url_utils::is_absolute_url(&resolved).0 {
                result.url = Some(resolved);
                return result;
            }
        }
    }

    // Fall back to the default base URL, which must itself be absolute
    if let Some(default_url) = opts.url.as_deref() {
        if url_utils::is_absolute_url(default_url).0 {
            result.url = Some(default_url.to_string());
        }
    }

    result
}

// ============================================================
// SITENAME
// ============================================================

/// Extract the site name from the tail of the `<title>` element.
#[must_use]
pub fn extract_dom_sitename(doc: &Document, original: Metadata, _opts: &Options) -> Metadata {
    let mut result = original;

    if result.sitename.is_some() {
        return result;
    }

    let head_title = doc.select("head > title");
    let Some(node) = head_title.nodes().first() else {
        return result;
    };

    let text = normalize(&dom::text_content(&Selection::from(node.clone())));
    if text.is_empty() {
        return result;
    }

    if let Some(caps) = SITENAME_FROM_TITLE.captures(&text) {
        let sitename = caps.get(1).map_or("", |m| m.as_str());
        if !sitename.is_empty() {
            result.sitename = Some(sitename.to_string());
        }
    }

    result
}

// ============================================================
// CATEGORIES AND TAGS
// ============================================================

/// Collect normalized anchor texts for the first selector whose links carry
/// the marker in their href.
fn collect_link_texts(doc: &Document, selectors: &[&str], href_marker: &str) -> Vec<String> {
    for rule in selectors {
        let mut found = Vec::new();

        for node in doc.select(rule).nodes() {
            let link = Selection::from(node.clone());
            let href = dom::get_attribute(&link, "href").unwrap_or_default();
            let href = href.trim();
            if href.is_empty() || !href.contains(href_marker) {
                continue;
            }

            let text = normalize(&dom::text_content(&link));
            if !text.is_empty() {
                found.push(text);
            }
        }

        if !found.is_empty() {
            return found;
        }
    }

    Vec::new()
}

/// Extract categories from `/category/` links, falling back to the
/// `article:section` meta tag.
#[must_use]
pub fn extract_dom_categories(doc: &Document, original: Metadata, _opts: &Options) -> Metadata {
    let mut result = original;

    if !result.categories.is_empty() {
        return result;
    }

    result.categories = collect_link_texts(doc, selector::META_CATEGORIES_SELECTORS, "/category/");

    if result.categories.is_empty() {
        let section = doc.select(r#"head meta[property="article:section"]"#);
        if let Some(node) = section.nodes().first() {
            let content =
                normalize(&dom::get_attribute(&Selection::from(node.clone()), "content").unwrap_or_default());
            if !content.is_empty() {
                result.categories.push(content);
            }
        }
    }

    result
}

/// Extract tags from `/tags/` links.
#[must_use]
pub fn extract_dom_tags(doc: &Document, original: Metadata, _opts: &Options) -> Metadata {
    let mut result = original;

    if !result.tags.is_empty() {
        return result;
    }

    result.tags = collect_link_texts(doc, selector::META_TAGS_SELECTORS, "/tags/");

    result
}
