// File: pagekit-forms/src/field.rs
// Purpose: A single user-editable input and its validity status

use std::fmt;

use pagekit_validation::{validate_rules, Rule, ValidationError};
use serde::Serialize;

/// Stable identifier of a field, matching the element id on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldId(&'static str);

impl FieldId {
    pub const FULL_NAME: FieldId = FieldId("fullName");
    pub const EMAIL: FieldId = FieldId("email");
    pub const MESSAGE: FieldId = FieldId("message");
    pub const NEWSLETTER_EMAIL: FieldId = FieldId("newsletterEmail");

    pub const fn new(id: &'static str) -> Self {
        FieldId(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Validity of a field; an error message exists only while invalid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Unvalidated,
    Valid,
    Invalid(ValidationError),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    /// Text for the field's feedback slot
    pub fn message(&self) -> Option<String> {
        match self {
            FieldStatus::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// A field governed by an ordered list of rules
#[derive(Debug, Clone)]
pub struct Field {
    id: FieldId,
    value: String,
    status: FieldStatus,
    rules: Vec<Rule>,
}

impl Field {
    pub fn new(id: FieldId, rules: Vec<Rule>) -> Self {
        Self {
            id,
            value: String::new(),
            status: FieldStatus::Unvalidated,
            rules,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn status(&self) -> &FieldStatus {
        &self.status
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Re-run the rules against the current value
    ///
    /// Returns `true` when the status actually changed, so callers only touch
    /// the page when there is something new to show.
    pub fn validate(&mut self) -> bool {
        let next = match validate_rules(&self.value, &self.rules) {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        };

        if next == self.status {
            return false;
        }

        self.status = next;
        true
    }

    /// Clear the value and forget any validation result
    pub fn reset(&mut self) {
        self.value.clear();
        self.status = FieldStatus::Unvalidated;
    }

    /// Forget the validation result but keep the value
    pub fn clear_status(&mut self) {
        self.status = FieldStatus::Unvalidated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_field() -> Field {
        Field::new(FieldId::FULL_NAME, vec![Rule::required("Full name")])
    }

    #[test]
    fn test_new_field_is_unvalidated() {
        let field = name_field();
        assert_eq!(field.status(), &FieldStatus::Unvalidated);
        assert_eq!(field.status().message(), None);
    }

    #[test]
    fn test_validate_reports_changes_only() {
        let mut field = name_field();
        field.set_value("Jane");

        assert!(field.validate());
        assert!(field.status().is_valid());
        assert!(!field.validate(), "second validation must be a no-op");

        field.set_value("");
        assert!(field.validate());
        assert_eq!(
            field.status().message().as_deref(),
            Some("Full name is required")
        );
    }

    #[test]
    fn test_valid_field_carries_no_message() {
        let mut field = name_field();
        field.set_value("  ");
        field.validate();
        field.set_value("Jane");
        field.validate();
        assert_eq!(field.status().message(), None);
    }

    #[test]
    fn test_reset() {
        let mut field = name_field();
        field.set_value("Jane");
        field.validate();
        field.reset();
        assert_eq!(field.value(), "");
        assert_eq!(field.status(), &FieldStatus::Unvalidated);
    }
}
