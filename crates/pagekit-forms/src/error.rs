//! Form-level errors
//!
//! Field validation failures never surface here; they are shown inline on the
//! field. These errors cover the submit lifecycle and the transport boundary.

use crate::form::SubmitPhase;

/// Failure reported by a submission transport
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct TransportError {
    pub reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors raised by form controllers
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("submission transport failed: {0}")]
    SubmissionTransportFailure(#[from] TransportError),

    #[error("form `{form}` has no field `{field}`")]
    UnknownField { form: &'static str, field: String },

    #[error("cannot settle a submission while the form is {0:?}")]
    NotSubmitting(SubmitPhase),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_wraps_reason() {
        let err: FormError = TransportError::new("connection reset").into();
        assert_eq!(
            err.to_string(),
            "submission transport failed: connection reset"
        );
    }
}
