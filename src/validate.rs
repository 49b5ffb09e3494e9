/// Client-side thread URL validation for ThreadCraft
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a Twitter/X thread URL. Anchored at the start only:
/// trailing content after the numeric status id (query strings, photo
/// suffixes) is accepted, mirroring the server-side check.
static THREAD_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(www\.)?(twitter|x)\.com/\w+/status/\d+").unwrap());

/// Classification of the URL input field's current content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Trimmed input matches the thread URL pattern.
    Valid,
    /// Non-empty input that does not match.
    Invalid,
    /// Input is empty or whitespace only.
    Empty,
}

/// Classify a raw input string.
///
/// Trims surrounding whitespace first; an empty result is `Empty`, not
/// `Invalid`, so the UI can distinguish "untouched" from "wrong".
pub fn validate(input: &str) -> Verdict {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Verdict::Empty;
    }

    if THREAD_URL_PATTERN.is_match(trimmed) {
        Verdict::Valid
    } else {
        Verdict::Invalid
    }
}

/// Convenience check used by the submit gate and the JS re-export.
pub fn is_valid_thread_url(input: &str) -> bool {
    validate(input) == Verdict::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_twitter_url() {
        assert_eq!(validate("https://twitter.com/user/status/123"), Verdict::Valid);
        assert_eq!(validate("http://twitter.com/user/status/123"), Verdict::Valid);
        assert_eq!(validate("https://www.twitter.com/user/status/123"), Verdict::Valid);
    }

    #[test]
    fn test_validate_x_url() {
        assert_eq!(validate("https://x.com/user/status/123"), Verdict::Valid);
        assert_eq!(validate("https://www.x.com/elonmusk/status/1234567890"), Verdict::Valid);
    }

    #[test]
    fn test_validate_trailing_content_permitted() {
        // Prefix match: anything after the numeric id is allowed
        assert_eq!(validate("https://x.com/user/status/123?query=1"), Verdict::Valid);
        assert_eq!(validate("https://twitter.com/user/status/123/photo/1"), Verdict::Valid);
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate(""), Verdict::Empty);
        assert_eq!(validate(" "), Verdict::Empty);
        assert_eq!(validate("\t\n  "), Verdict::Empty);
    }

    #[test]
    fn test_validate_trims_whitespace() {
        assert_eq!(validate("  https://x.com/user/status/123  "), Verdict::Valid);
        assert_eq!(validate("  not a url  "), Verdict::Invalid);
    }

    #[test]
    fn test_validate_missing_scheme() {
        assert_eq!(validate("twitter.com/user/status/123"), Verdict::Invalid);
        assert_eq!(validate("www.x.com/user/status/123"), Verdict::Invalid);
    }

    #[test]
    fn test_validate_non_digit_status_id() {
        assert_eq!(validate("https://twitter.com/user/status/abc"), Verdict::Invalid);
        assert_eq!(validate("twitter.com/user/status/abc"), Verdict::Invalid);
    }

    #[test]
    fn test_validate_wrong_host() {
        assert_eq!(validate("https://example.com/user/status/123"), Verdict::Invalid);
        assert_eq!(validate("https://mastodon.social/@user/123"), Verdict::Invalid);
    }

    #[test]
    fn test_validate_handle_characters() {
        // Word characters only: letters, digits, underscore
        assert_eq!(validate("https://x.com/user_123/status/456"), Verdict::Valid);
        assert_eq!(validate("https://x.com//status/456"), Verdict::Invalid);
    }

    #[test]
    fn test_validate_incomplete_paths() {
        assert_eq!(validate("https://twitter.com/user"), Verdict::Invalid);
        assert_eq!(validate("https://twitter.com/user/status/"), Verdict::Invalid);
        assert_eq!(validate("https://twitter.com/"), Verdict::Invalid);
    }

    #[test]
    fn test_is_valid_thread_url() {
        assert!(is_valid_thread_url("https://x.com/user/status/99"));
        assert!(!is_valid_thread_url("https://x.com/user"));
        assert!(!is_valid_thread_url(""));
    }
}
