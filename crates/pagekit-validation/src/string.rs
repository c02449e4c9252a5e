//! String validation functions

use alloc::borrow::Cow;

use crate::error::ValidationError;

/// Subject used when a field has no more specific name
pub const GENERIC_SUBJECT: &str = "This field";

/// Number of characters in a value, as shown by the character counter
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// True when the value has no non-whitespace content
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates that a trimmed value is non-empty
pub fn validate_required(
    value: &str,
    subject: impl Into<Cow<'static, str>>,
) -> Result<(), ValidationError> {
    if is_blank(value) {
        Err(ValidationError::missing(subject))
    } else {
        Ok(())
    }
}

/// Validates trimmed length against an inclusive minimum
pub fn validate_min_length(
    value: &str,
    min: usize,
    subject: impl Into<Cow<'static, str>>,
) -> Result<(), ValidationError> {
    if char_len(value.trim()) >= min {
        Ok(())
    } else {
        Err(ValidationError::too_short(subject, min))
    }
}
