//! Configuration options for metadata extraction.

/// Configuration options for metadata extraction.
///
/// All fields are public for easy configuration; use `Default::default()`
/// for standard settings and struct update syntax to override individual
/// fields.
///
/// # Example
///
/// ```rust
/// use metasift::Options;
///
/// let options = Options {
///     url: Some("https://example.org/article".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Default base URL of the document.
    ///
    /// Used to absolutize relative canonical links and as the last-resort
    /// value for the URL field when the document itself declares none.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Author names to filter out of the result.
    ///
    /// An extracted author containing any of these strings
    /// (case-insensitive) is dropped. Useful for site-wide bylines and bot
    /// accounts.
    ///
    /// Default: `None`
    pub author_blacklist: Option<Vec<String>>,

    /// Accept `twitter:creator` meta values as an author source.
    ///
    /// Twitter creator handles are usually `@handles` rather than person
    /// names, so this source is off by default; values still pass author
    /// validation when enabled.
    ///
    /// Default: `false`
    pub twitter_creator_author: bool,
}
