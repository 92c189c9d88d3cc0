//! CSS selector tables for DOM metadata extraction.
//!
//! Each table is an ordered battery: entries are tried top to bottom and the
//! first one that yields a usable result wins, so order is load-bearing.
//! Entries earlier in a table target the most specific, most trustworthy
//! markup (theme-specific classes), later entries loosen the net.

/// Title selectors, scanned until a node yields text under the title
/// length limit.
pub static META_TITLE_SELECTORS: &[&str] = &[
    r#"h1[class*="post-title"], h1[class*="entry-title"], h1[class*="headline"], h1#headline, h1[itemprop="headline"], h1[class*="post__title"], h1[class*="article-title"]"#,
    r#"h2[class*="post-title"], h2[class*="entry-title"], h2[itemprop="headline"]"#,
    r#"*[class="entry-title"], *[class="post-title"]"#,
    r#"h1[class*="title"], h1[id*="title"], h2[class*="title"], h2[id*="title"]"#,
];

/// Author selectors, scanned until a node yields text under the author
/// length limit.
pub static META_AUTHOR_SELECTORS: &[&str] = &[
    r#"a[rel="author"], address[class*="author"], link[rel="author"], author"#,
    r#"a[class="author"], a#author, p[class="author"], span[class="author"], strong[class="author"], a[rel="me"]"#,
    r#"span[itemprop="author name"], *[itemprop="author"] *[itemprop="name"]"#,
    r#"a[class*="author-name"], div[class*="author-name"], p[class*="author-name"], span[class*="author-name"]"#,
    r#"a[class*="AuthorName"], span[class*="AuthorName"], a[class*="authorName"], span[class*="authorName"]"#,
    r#"a[class*="author"], div[class*="author"], h3[class*="author"], h4[class*="author"], p[class*="author"], span[class*="author"], a[id*="author"], div[id*="author"], span[id*="author"]"#,
    r#"a[class="byline"], div[class="byline"], p[class="byline"], span[class="byline"], div[class*="byline"], span[class*="byline"]"#,
    r#"div[class*="submitted-by"], div[class*="posted-by"], span[class*="submitted-by"], span[class*="posted-by"]"#,
];

/// Category link selectors; matched anchors still need `/category/` in
/// their href.
pub static META_CATEGORIES_SELECTORS: &[&str] = &[
    r#"div[class^="post-info"] a, div[class^="postinfo"] a, div[class^="post-meta"] a, div[class^="postmeta"] a, div[class^="meta"] a"#,
    r#"div[class^="entry-meta"] a, div[class^="entry-info"] a, div[class^="entry-utility"] a, div[id^="postpath"] a"#,
    r#"p[class^="postmeta"] a, p[class^="entry-categories"] a, p[class^="postinfo"] a, p[id^="filedunder"] a"#,
    r#"footer[class^="entry-meta"] a, footer[class^="entry-footer"] a"#,
    r#"li[class="post-category"] a, span[class="post-category"] a, li[class="entry-category"] a, span[class="entry-category"] a"#,
    r#"header[class="entry-header"] a, div[class="row"] a, div[class="tags"] a"#,
];

/// Tag link selectors; matched anchors still need `/tags/` in their href.
pub static META_TAGS_SELECTORS: &[&str] = &[
    r#"div[class="tags"] a, p[class^="entry-tags"] a"#,
    r#"div[class^="tag"] a, div[class^="postmeta"] a, div[class^="meta"] a"#,
    r#"div[class*="tags-links"] a, div[class*="topics"] a, ul[class*="tag"] a, footer[class^="entry-meta"] a"#,
];
