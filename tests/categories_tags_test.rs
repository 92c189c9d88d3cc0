use metasift::extract;

#[test]
fn categories_from_category_links() {
    let html = r#"<html><body>
        <p class="entry-categories">
            <a href="https://example.org/category/cat1/">Cat1</a>,
            <a href="https://example.org/category/cat2/">Cat2</a>
        </p></body></html>"#;
    assert_eq!(extract(html).categories, vec!["Cat1", "Cat2"]);
}

#[test]
fn tags_from_tag_links() {
    let html = r#"<html><body>
        <p class="entry-tags">
            <a href="https://example.org/tags/tag1/">Tag1</a>,
            <a href="https://example.org/tags/tag2/">Tag2</a>
        </p></body></html>"#;
    assert_eq!(extract(html).tags, vec!["Tag1", "Tag2"]);
}

#[test]
fn json_ld_article_section_beats_dom_links() {
    let html = r#"<html><head>
        <script type="application/ld+json">
        {"@type": "Article", "articleSection": "Politics"}
        </script>
    </head><body>
        <p class="entry-categories">
            <a href="https://example.org/category/ignored/">Ignored</a>
        </p></body></html>"#;
    assert_eq!(extract(html).categories, vec!["Politics"]);
}

#[test]
fn categories_fall_back_to_article_section_meta() {
    let html = r#"<html><head><meta property="article:section" content="Education"/></head></html>"#;
    assert_eq!(extract(html).categories, vec!["Education"]);
}

#[test]
fn tags_from_article_tag_properties() {
    let html = r#"<html><head>
        <meta property="article:tag" content="programming"/>
        <meta property="article:tag" content="rust"/>
    </head></html>"#;
    assert_eq!(extract(html).tags, vec!["programming", "rust"]);
}

#[test]
fn tags_from_keywords_meta() {
    let html = r#"<html><head><meta name="keywords" content="science, physics ; nanotech"/></head></html>"#;
    assert_eq!(extract(html).tags, vec!["science", "physics", "nanotech"]);
}

#[test]
fn comma_separated_entries_are_split() {
    let html = r#"<html><head>
        <script type="application/ld+json">
        {"@type": "Article", "articleSection": "Science & Health, Environment"}
        </script>
    </head></html>"#;
    assert_eq!(extract(html).categories, vec!["Science & Health", "Environment"]);
}

#[test]
fn entries_have_no_stray_whitespace() {
    let html = r#"<html><body>
        <p class="entry-tags">
            <a href="/tags/one/">  spaced   text </a>
        </p></body></html>"#;

    let metadata = extract(html);
    assert_eq!(metadata.tags, vec!["spaced text"]);
    for entry in metadata.categories.iter().chain(metadata.tags.iter()) {
        assert_eq!(entry, entry.trim());
        assert!(!entry.is_empty());
    }
}

#[test]
fn unrelated_links_yield_nothing() {
    let html = r#"<html><body>
        <p class="entry-categories"><a href="/about/">About us</a></p>
        <p class="entry-tags"><a href="/contact/">Contact</a></p>
    </body></html>"#;

    let metadata = extract(html);
    assert!(metadata.categories.is_empty());
    assert!(metadata.tags.is_empty());
}
