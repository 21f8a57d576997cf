//! Instagram post/reel URL validation
//!
//! A pure predicate gating the workflow: nothing past this point sees a
//! URL that does not at least look like a shareable Instagram media link.
//! No network access and no side effects.

use regex::Regex;
use std::sync::OnceLock;

/// Anchored prefix for supported post links:
/// optional http/https scheme, optional www, one of the platform's host
/// aliases, a content-type tag (p/reel/tv) and a non-empty shortcode.
/// Scheme and host match case-insensitively; the shortcode is
/// case-sensitive. Anything after the anchored prefix (query string,
/// fragment) is allowed through.
const POST_URL_PATTERN: &str =
    r"^((?i:https?)://)?((?i:www)\.)?(?i:instagram\.com|instagr\.am)/(p|reel|tv)/[a-zA-Z0-9_-]+/?";

// The pattern is a compile-time constant; failing to compile it is a bug,
// not a runtime condition worth propagating.
#[allow(clippy::expect_used)]
fn post_url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(POST_URL_PATTERN).expect("post URL pattern is a valid regex"))
}

/// Check whether a string is a well-formed Instagram post or reel URL.
///
/// # Examples
///
/// ```
/// use insta_dl::validator::is_valid_post_url;
///
/// assert!(is_valid_post_url("https://www.instagram.com/reel/XyZ123/"));
/// assert!(is_valid_post_url("instagram.com/p/abc"));
/// assert!(!is_valid_post_url("https://example.com/p/abc"));
/// ```
#[must_use]
pub fn is_valid_post_url(url: &str) -> bool {
    post_url_regex().is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_forms() {
        for url in [
            "https://www.instagram.com/p/Cabc123/",
            "https://www.instagram.com/reel/XyZ123/",
            "https://www.instagram.com/tv/long_form-id/",
            "http://instagram.com/p/abc",
            "https://instagr.am/reel/abc123",
            "instagram.com/p/abc",
            "www.instagram.com/reel/abc_DEF-123",
        ] {
            assert!(is_valid_post_url(url), "should accept {url}");
        }
    }

    #[test]
    fn test_rejects_non_matching_strings() {
        for url in [
            "",
            "not a url",
            "https://example.com/p/abc",
            "https://www.instagram.com/",
            "https://www.instagram.com/p/",
            "https://www.instagram.com/stories/someone/123",
            "https://www.instagram.com/username",
            "ftp://instagram.com/p/abc",
            "https://notinstagram.com/p/abc",
        ] {
            assert!(!is_valid_post_url(url), "should reject {url}");
        }
    }

    #[test]
    fn test_scheme_and_host_case_relaxed() {
        assert!(is_valid_post_url("HTTPS://WWW.INSTAGRAM.COM/reel/abc"));
        assert!(is_valid_post_url("https://Instagram.Com/p/abc"));
    }

    #[test]
    fn test_content_tag_case_preserved() {
        // The path tag and shortcode are matched case-sensitively
        assert!(!is_valid_post_url("https://www.instagram.com/REEL/abc"));
        assert!(is_valid_post_url("https://www.instagram.com/reel/AbC"));
    }

    #[test]
    fn test_trailing_query_still_valid() {
        assert!(is_valid_post_url(
            "https://www.instagram.com/reel/XyZ123/?igsh=deadbeef"
        ));
        assert!(is_valid_post_url(
            "https://www.instagram.com/p/abc?utm_source=share"
        ));
    }
}
