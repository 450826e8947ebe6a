//! Pure helpers which derive display strings from raw result fields.
//!
//! Every function here is total: malformed input degrades to a best-effort
//! string, it never panics.

use chrono::{DateTime, NaiveDate};
use url::Url;

/// Longest snippet shown in the preview pane, in characters.
const MAX_CONTENT_CHARS: usize = 150;

/// The host of `url`, with any leading "www." stripped.
///
/// Unparsable input is returned trimmed, so the caller always has something
/// to display.
pub fn host_name_of(url: &str) -> String {
    Url::parse(url.trim())
        .ok()
        .and_then(|url| url.host_str().map(ToOwned::to_owned))
        .map(|host| match host.strip_prefix("www.") {
            Some(stripped) => stripped.to_owned(),
            None => host,
        })
        .unwrap_or_else(|| url.trim().to_owned())
}

/// Reformats a raw date string as e.g. "Mar 5, 2025".
///
/// Accepts RFC 3339, RFC 2822 and plain "YYYY-MM-DD" input. Anything else is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|datetime| datetime.date_naive())
        .or_else(|_| DateTime::parse_from_rfc2822(raw).map(|datetime| datetime.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_owned())
}

/// Bounds a snippet to [MAX_CONTENT_CHARS] characters, appending an ellipsis.
///
/// The cut is made on a character boundary, so multi-byte input is safe.
pub fn truncate_content(text: &str) -> String {
    match text.char_indices().nth(MAX_CONTENT_CHARS) {
        None => text.to_owned(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_name_of_strips_www() {
        assert_eq!(host_name_of("https://www.example.com/page"), "example.com");
    }

    #[test]
    fn test_host_name_of_keeps_subdomains() {
        assert_eq!(host_name_of("https://docs.rs/url"), "docs.rs");
    }

    #[test]
    fn test_host_name_of_degrades_on_malformed_input() {
        assert_eq!(host_name_of("  not a url "), "not a url");
        assert_eq!(host_name_of(""), "");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2025-03-05T12:30:00Z"), "Mar 5, 2025");
    }

    #[test]
    fn test_format_date_rfc2822() {
        assert_eq!(format_date("Wed, 05 Mar 2025 12:30:00 GMT"), "Mar 5, 2025");
    }

    #[test]
    fn test_format_date_plain() {
        assert_eq!(format_date("2025-12-31"), "Dec 31, 2025");
    }

    #[test]
    fn test_format_date_degrades_on_malformed_input() {
        assert_eq!(format_date("last tuesday"), "last tuesday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_truncate_content_returns_short_input_unchanged() {
        assert_eq!(truncate_content("short snippet"), "short snippet");
    }

    #[test]
    fn test_truncate_content_bounds_long_input() {
        let long = "a".repeat(500);
        let truncated = truncate_content(&long);
        assert_eq!(truncated.chars().count(), 150 + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_content_respects_char_boundaries() {
        let long = "é".repeat(200);
        let truncated = truncate_content(&long);
        assert_eq!(truncated.chars().count(), 150 + 3);
    }
}
