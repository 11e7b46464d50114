//! # Catalog Identifier Resolution
//!
//! Product links embed a 10-character uppercase-alphanumeric catalog
//! identifier (e.g. `/dp/B08XYZAB12/`). This module extracts it and maps it
//! to a cover-image URL. Both operations are pure; a link without an
//! identifier is a valid book that simply renders without a cover.

use once_cell::sync::Lazy;
use regex::Regex;

// Identifier must be preceded by '/' and terminated by '/', '?' or the end
// of the string.
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([A-Z0-9]{10})(?:[/?]|$)").unwrap());

const COVER_URL_PREFIX: &str = "https://images-na.ssl-images-amazon.com/images/P/";
const COVER_URL_SUFFIX: &str = ".09.LZZZZZZZ.jpg";

/// Extracts the first catalog identifier from a product URL, if any.
pub fn extract_identifier(url: &str) -> Option<&str> {
    IDENTIFIER_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Builds the cover-image URL for an identifier.
///
/// Pure string template. Whether the resulting URL resolves to a real image
/// is not checked; a broken cover is an accepted degraded state.
pub fn cover_image_url(identifier: &str) -> String {
    format!("{}{}{}", COVER_URL_PREFIX, identifier, COVER_URL_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_identifier_from_dp_path() {
        assert_eq!(
            extract_identifier("https://www.amazon.com/dp/B08XYZAB12/"),
            Some("B08XYZAB12")
        );
    }

    #[test]
    fn extracts_identifier_at_end_of_string() {
        assert_eq!(
            extract_identifier("https://www.amazon.com/dp/B000FI73MA"),
            Some("B000FI73MA")
        );
    }

    #[test]
    fn extracts_identifier_before_query_string() {
        assert_eq!(
            extract_identifier("https://www.amazon.com/gp/product/B01N5IB20Q?ref=nav"),
            Some("B01N5IB20Q")
        );
    }

    #[test]
    fn extracts_first_match_when_several_qualify() {
        assert_eq!(
            extract_identifier("https://host/AAAAAAAAAA/BBBBBBBBBB/"),
            Some("AAAAAAAAAA")
        );
    }

    #[test]
    fn accepts_digit_only_identifiers() {
        // ISBN-10 style codes are all digits and still ten characters.
        assert_eq!(
            extract_identifier("https://www.amazon.co.jp/dp/4873113946/"),
            Some("4873113946")
        );
    }

    #[test]
    fn rejects_lowercase_and_wrong_length() {
        assert_eq!(extract_identifier("https://host/b08xyzab12/"), None);
        assert_eq!(extract_identifier("https://host/B08XYZAB1/"), None);
        assert_eq!(extract_identifier("https://host/B08XYZAB123/"), None);
    }

    #[test]
    fn rejects_segment_not_preceded_by_slash() {
        assert_eq!(extract_identifier("B08XYZAB12"), None);
        assert_eq!(extract_identifier("https://host/xB08XYZAB12/"), None);
    }

    #[test]
    fn rejects_empty_and_unrelated_urls() {
        assert_eq!(extract_identifier(""), None);
        assert_eq!(extract_identifier("https://example.com/books"), None);
    }

    #[test]
    fn cover_url_embeds_identifier() {
        let url = cover_image_url("B08XYZAB12");
        assert!(url.contains("B08XYZAB12"));
        assert!(url.ends_with(".jpg"));
    }
}
