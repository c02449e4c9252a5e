//! Email validation functions

use crate::error::ValidationError;

/// Subject used in the "is required" message for email fields
pub const EMAIL_SUBJECT: &str = "Email address";

/// Validates basic email format
///
/// Accepts exactly the strings matched by `^[^@\s]+@[^@\s]+\.[^@\s]+$`:
/// - No whitespace anywhere
/// - Exactly one '@' with content before it
/// - A '.' in the domain part with content on both sides
///
/// The value is checked as given; callers trim first.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates an email field value
///
/// An empty (or whitespace-only) value reports the missing value rather than
/// a malformed address.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::missing(EMAIL_SUBJECT));
    }

    if !is_valid_email(value) {
        return Err(ValidationError::MalformedEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    const SAMPLES: &[&str] = &[
        "",
        "a@b.co",
        "a@b",
        "@b.co",
        "a@.co",
        "a@b.",
        "a@b..c",
        "a@.b.c",
        ".@a.b",
        "a@@b.co",
        "a@b@c.co",
        "a b@c.co",
        "a@b.c\to",
        "user+tag@example.co.uk",
        "jane@example.com",
        "not-an-email",
        "x@y.com",
        "ünï@cödé.ßß",
        "a@b.c.d.e",
        "a@...",
    ];

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("user+tag@example.co.uk"));
        assert!(is_valid_email("a@.b.c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_matches_reference_pattern() {
        let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
        for sample in SAMPLES {
            assert_eq!(
                is_valid_email(sample),
                pattern.is_match(sample),
                "disagreement on {sample:?}"
            );
        }
    }

    #[test]
    fn test_validate_email_messages() {
        assert_eq!(
            validate_email("   "),
            Err(ValidationError::missing("Email address"))
        );
        assert_eq!(validate_email("a@b"), Err(ValidationError::MalformedEmail));
        assert_eq!(validate_email("  a@b.co  "), Ok(()));
    }
}
