//! JSON-LD metadata extraction.
//!
//! Parses every embedded Schema.org script, walks the graph for article and
//! person objects, and merges the findings into the record under the
//! documented override rules. The data source is hostile: unparseable
//! scripts and unexpected shapes are skipped, never reported.

use dom_query::{Document, Selection};
use serde_json::{Map, Value};

use crate::dom;
use crate::patterns::{JSON_SYMBOL, NAME_IN_JSON};
use crate::result::Metadata;
use crate::text_utils::{normalize, word_count};
use crate::Options;

use super::meta_tags::is_valid_author;

/// Recursion cap for the schema graph walk. Real-world graphs are a few
/// levels deep; anything beyond this is treated as hostile and skipped.
const MAX_SCHEMA_DEPTH: usize = 64;

/// Script types that may carry Schema.org data, probed in order.
const SCHEMA_SCRIPT_SELECTORS: &[&str] = &[
    r#"script[type="application/ld+json"]"#,
    r#"script[type="application/settings+json"]"#,
];

/// Extract metadata from Schema.org JSON-LD scripts and merge it into the
/// existing record.
///
/// Override rules on merge:
/// - author and categories replace existing values when found;
/// - sitename replaces the existing value only when strictly longer
///   (by character count);
/// - title only fills a blank.
#[must_use]
pub fn extract_json_ld(doc: &Document, original: Metadata, _opts: &Options) -> Metadata {
    let mut found = Metadata::default();

    'scripts: for selector in SCHEMA_SCRIPT_SELECTORS {
        for node in doc.select(selector).nodes() {
            let script = Selection::from(node.clone());
            let text = dom::text_content(&script);
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let Ok(data) = serde_json::from_str::<Value>(text) else {
                continue;
            };

            let mut persons: Vec<Map<String, Value>> = Vec::new();
            let mut articles: Vec<Map<String, Value>> = Vec::new();
            collect_schema_objects(&data, 0, &mut persons, &mut articles);

            for article in &articles {
                if found.author.is_none() {
                    // Only accept authors explicitly typed as a person
                    found.author = extract_thing_name(article.get("author"), &["Person"])
                        .filter(|author| is_valid_author(author));
                }

                if found.sitename.is_none() {
                    found.sitename = extract_thing_name(article.get("publisher"), &[]);
                }

                if found.categories.is_empty() {
                    if let Some(Value::String(section)) = article.get("articleSection") {
                        let section = normalize(section);
                        if !section.is_empty() {
                            found.categories.push(section);
                        }
                    }
                }

                if found.title.is_none() {
                    if let Some(name) = article.get("name") {
                        found.title = json_string(name);
                    }
                }

                // A missing or one-word title is suspicious; look for a
                // headline-ish key instead.
                if found.title.as_deref().map_or(true, |t| word_count(t) == 1) {
                    for (key, value) in article {
                        if !key.to_lowercase().contains("headline") {
                            continue;
                        }
                        match json_string(value) {
                            Some(title) if !title.contains("...") => {
                                found.title = Some(title);
                                break;
                            }
                            _ => {}
                        }
                    }
                }
            }

            // No article claimed an author: fall back to the persons found
            // anywhere in the graph.
            if found.author.is_none() {
                let names: Vec<String> = persons
                    .iter()
                    .filter_map(|person| person.get("name").and_then(json_string))
                    .filter(|name| is_valid_author(name))
                    .collect();
                if !names.is_empty() {
                    found.author = Some(names.join("; "));
                }
            }

            if found.author.is_some()
                && found.sitename.is_some()
                && !found.categories.is_empty()
                && found.title.is_some()
            {
                break 'scripts;
            }
        }
    }

    merge(original, found)
}

/// Apply the JSON-LD override rules to the existing record.
fn merge(original: Metadata, found: Metadata) -> Metadata {
    let mut result = original;

    if found.author.is_some() {
        result.author = found.author;
    }

    if !found.categories.is_empty() {
        result.categories = found.categories;
    }

    // Character count, not byte length: non-ASCII publisher names must
    // compare by their visible size.
    let found_len = found.sitename.as_deref().map_or(0, |s| s.chars().count());
    let current_len = result.sitename.as_deref().map_or(0, |s| s.chars().count());
    if found_len > current_len {
        result.sitename = found.sitename;
    }

    if result.title.is_none() {
        result.title = found.title;
    }

    result
}

/// Recursively collect `Person` and article-like objects from a schema
/// value.
///
/// An object with a matching `@type` is collected whole and not descended
/// into; anything else is walked through objects and arrays of objects.
fn collect_schema_objects(
    value: &Value,
    depth: usize,
    persons: &mut Vec<Map<String, Value>>,
    articles: &mut Vec<Map<String, Value>>,
) {
    if depth > MAX_SCHEMA_DEPTH {
        return;
    }

    match value {
        Value::Object(obj) => {
            if let Some(Value::String(obj_type)) = obj.get("@type") {
                let is_article = obj_type.contains("Article")
                    || obj_type == "SocialMediaPosting"
                    || obj_type == "Report";

                if is_article {
                    articles.push(obj.clone());
                    return;
                }
                if obj_type == "Person" {
                    persons.push(obj.clone());
                    return;
                }
            }

            for child in obj.values() {
                match child {
                    Value::Object(_) => collect_schema_objects(child, depth + 1, persons, articles),
                    Value::Array(items) => {
                        for item in items {
                            if item.is_object() {
                                collect_schema_objects(item, depth + 1, persons, articles);
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if item.is_object() {
                    collect_schema_objects(item, depth + 1, persons, articles);
                }
            }
        }
        _ => {}
    }
}

/// Pull a display name out of a schema "thing" value.
///
/// Handles the shapes seen in the wild: a bare string (possibly carrying a
/// botched nested JSON literal), a typed object with a `name`, or an array
/// of either, joined with `"; "`. `allowed_types` constrains the `@type` of
/// object values; an empty slice accepts anything.
fn extract_thing_name(value: Option<&Value>, allowed_types: &[&str]) -> Option<String> {
    match value? {
        Value::String(s) => {
            let raw = if JSON_SYMBOL.is_match(s) {
                // An unescaped JSON payload leaked into the string; try to
                // recover the name field from it.
                NAME_IN_JSON.captures(s)?.get(1)?.as_str()
            } else {
                s.as_str()
            };

            let name = normalize(raw);
            if name.is_empty() {
                None
            } else {
                Some(name)
            }
        }

        Value::Object(obj) => {
            if !allowed_types.is_empty() {
                if let Some(Value::String(obj_type)) = obj.get("@type") {
                    if !allowed_types.contains(&obj_type.as_str()) {
                        return None;
                    }
                }
            }
            obj.get("name").and_then(json_string)
        }

        Value::Array(items) => {
            let mut names = Vec::new();
            for entry in items {
                match entry {
                    Value::String(s) => {
                        let name = normalize(s);
                        if !name.is_empty() {
                            names.push(name);
                        }
                    }
                    Value::Object(obj) => {
                        if let Some(name) = obj.get("name").and_then(json_string) {
                            names.push(name);
                        }
                    }
                    _ => {}
                }
            }

            if names.is_empty() {
                None
            } else {
                Some(names.join("; "))
            }
        }

        _ => None,
    }
}

/// Normalize a JSON value into a non-empty string, if it is one.
fn json_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = normalize(s);
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        }
        _ => None,
    }
}
