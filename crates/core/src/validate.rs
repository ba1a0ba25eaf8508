//! Input validation helpers shared by handlers and the seed routine.

use std::sync::LazyLock;

use regex::Regex;

/// Pragmatic email shape check: one `@`, a non-empty local part, and a dotted
/// domain. Not an RFC 5322 parser.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile"));

/// URL-safe slug: lowercase alphanumerics separated by single hyphens.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex must compile"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_slug(value: &str) -> bool {
    SLUG_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.mv"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("nodot@example"));
    }

    #[test]
    fn accepts_simple_slugs() {
        assert!(is_valid_slug("top-10-islands"));
        assert!(is_valid_slug("guide"));
    }

    #[test]
    fn rejects_bad_slugs() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Trailing-"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("Upper-Case"));
        assert!(!is_valid_slug("with space"));
    }
}
