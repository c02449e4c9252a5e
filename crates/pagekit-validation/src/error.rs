//! Field-level validation failures
//!
//! Each variant renders as the exact text shown next to the offending field.

use alloc::borrow::Cow;

/// Why a field value was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Trimmed value is empty
    #[error("{subject} is required")]
    MissingRequiredValue { subject: Cow<'static, str> },

    /// Value is present but does not look like an email address
    #[error("Please enter a valid email address")]
    MalformedEmail,

    /// Trimmed value is shorter than the configured minimum
    #[error("{subject} must be at least {min} characters long")]
    MessageTooShort {
        subject: Cow<'static, str>,
        min: usize,
    },
}

impl ValidationError {
    pub fn missing(subject: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingRequiredValue {
            subject: subject.into(),
        }
    }

    pub fn too_short(subject: impl Into<Cow<'static, str>>, min: usize) -> Self {
        Self::MessageTooShort {
            subject: subject.into(),
            min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::missing("Full name").to_string(),
            "Full name is required"
        );
        assert_eq!(
            ValidationError::MalformedEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::too_short("Message", 20).to_string(),
            "Message must be at least 20 characters long"
        );
    }
}
