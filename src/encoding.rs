//! Character encoding detection and transcoding for byte input.
//!
//! Crawled pages arrive as bytes in whatever encoding the origin served.
//! The charset is sniffed from the byte order mark or from a `charset=`
//! declaration in the leading bytes, then the payload is decoded to UTF-8
//! with invalid sequences replaced rather than rejected.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// How many leading bytes to scan for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Matches `charset=` declarations in both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">` forms.
#[allow(clippy::expect_used)]
static CHARSET_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([a-zA-Z0-9_\-]+)"#).expect("CHARSET_DECL regex")
});

/// Decode HTML bytes to a UTF-8 string.
///
/// A byte order mark always wins; otherwise the first `charset=`
/// declaration in the leading bytes decides, defaulting to UTF-8.
///
/// # Examples
///
/// ```
/// use metasift::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = sniff_encoding(html);
    // decode() re-checks the BOM itself, so a mislabeled charset cannot
    // override an explicit BOM.
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

/// Sniff the declared encoding of an HTML byte stream.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_WINDOW)];
    if let Some(caps) = CHARSET_DECL.captures(head) {
        if let Some(encoding) = Encoding::for_label(&caps[1]) {
            return encoding;
        }
    }

    UTF_8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        assert_eq!(sniff_encoding(html), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn sniffs_http_equiv_charset() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251">"#;
        assert_eq!(sniff_encoding(html), encoding_rs::WINDOWS_1251);
    }

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(sniff_encoding(b"<html><body>plain</body></html>"), UTF_8);
    }

    #[test]
    fn bom_wins_over_declaration() {
        let mut html = b"\xef\xbb\xbf".to_vec();
        html.extend_from_slice(br#"<meta charset="ISO-8859-1"><body>ok</body>"#);
        assert_eq!(sniff_encoding(&html), UTF_8);
    }

    #[test]
    fn decodes_latin1_bytes() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        assert!(decode_html(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let html = b"<html><body>ok \xff\xfe\xfd</body></html>";
        let decoded = decode_html(html);
        assert!(decoded.contains("ok"));
    }
}
