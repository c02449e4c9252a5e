// File: pagekit-forms/src/form.rs
// Purpose: Aggregate validity and submit lifecycle for a group of fields

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::field::{Field, FieldId};

/// Which form on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormId {
    Contact,
    Newsletter,
}

impl FormId {
    /// Element id of the form
    pub fn as_str(&self) -> &'static str {
        match self {
            FormId::Contact => "contactForm",
            FormId::Newsletter => "newsletterForm",
        }
    }
}

/// Submission phase of a form
///
/// `Succeeded` and `Failed` are transient: the form returns to `Idle` as soon
/// as their effects have been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of the submit guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    /// All fields valid; the form is now `Submitting`
    Open,
    /// A submission is already in flight; nothing was validated
    InFlight,
    /// At least one field failed; the form stays `Idle`
    Invalid { invalid_fields: usize },
}

/// Outcome of a submit attempt, with the fields whose status changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAttempt {
    pub gate: SubmitGate,
    pub changed: Vec<FieldId>,
}

/// Validity and lifecycle state for one form
#[derive(Debug, Clone)]
pub struct FormState {
    id: FormId,
    fields: Vec<Field>,
    phase: SubmitPhase,
    attempted: bool,
}

impl FormState {
    pub fn new(id: FormId, fields: Vec<Field>) -> Self {
        Self {
            id,
            fields,
            phase: SubmitPhase::Idle,
            attempted: false,
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Whether a submit has been tried since the last successful submission
    pub fn is_attempted(&self) -> bool {
        self.attempted
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id().as_str() == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Result<&mut Field, FormError> {
        let form = self.id.as_str();
        self.fields
            .iter_mut()
            .find(|f| f.id().as_str() == id)
            .ok_or_else(|| FormError::UnknownField {
                form,
                field: id.to_string(),
            })
    }

    /// True iff every field is currently `Valid`
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.status().is_valid())
    }

    /// Validate every field independently
    ///
    /// Returns the ids of fields whose status changed.
    pub fn validate_all(&mut self) -> Vec<FieldId> {
        self.fields
            .iter_mut()
            .filter_map(|field| field.validate().then(|| field.id()))
            .collect()
    }

    /// Guarded `Idle -> Submitting` transition
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.phase != SubmitPhase::Idle {
            return SubmitAttempt {
                gate: SubmitGate::InFlight,
                changed: Vec::new(),
            };
        }

        let changed = self.validate_all();
        self.attempted = true;

        let invalid_fields = self
            .fields
            .iter()
            .filter(|f| !f.status().is_valid())
            .count();

        let gate = if invalid_fields == 0 {
            self.phase = SubmitPhase::Submitting;
            SubmitGate::Open
        } else {
            SubmitGate::Invalid { invalid_fields }
        };

        SubmitAttempt { gate, changed }
    }

    /// `Submitting -> Succeeded | Failed`
    ///
    /// On success every field is cleared and the attempted mark dropped.
    pub fn settle(&mut self, succeeded: bool) -> Result<SubmitPhase, FormError> {
        if self.phase != SubmitPhase::Submitting {
            return Err(FormError::NotSubmitting(self.phase));
        }

        if succeeded {
            self.fields.iter_mut().for_each(Field::reset);
            self.attempted = false;
            self.phase = SubmitPhase::Succeeded;
        } else {
            self.phase = SubmitPhase::Failed;
        }

        Ok(self.phase)
    }

    /// `Succeeded | Failed -> Idle`
    pub fn finish(&mut self) {
        self.phase = SubmitPhase::Idle;
    }
}
