// File: pagekit-forms/src/contact.rs
// Purpose: Contact form controller - live validation, submit guard, async submission

use pagekit_validation::Rule;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::FormsConfig;
use crate::counter::CharacterCounter;
use crate::error::{FormError, TransportError};
use crate::field::{Field, FieldId, FieldStatus};
use crate::form::{FormId, FormState, SubmitGate, SubmitPhase};
use crate::presenter::{Deferred, DeferredEffect, Presenter};
use crate::transport::{ContactSubmission, SubmissionTransport};

/// Generic notice shown when the transport rejects a submission
pub const TRANSPORT_FAILURE_NOTICE: &str =
    "There was an error sending your message. Please try again.";

/// Result of the synchronous half of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    /// The form is now `Submitting`; hand this snapshot to the transport
    Dispatch(ContactSubmission),
    /// Validation failed; the form stays `Idle`
    Rejected { invalid_fields: usize },
    /// A submission is already in flight
    InFlight,
}

/// Final result of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected { invalid_fields: usize },
    InFlight,
    /// Sent; `follow_up` hides the success notice
    Succeeded { follow_up: Deferred },
    /// Transport rejected; values kept for a retry
    Failed { error: TransportError },
}

/// Controller for the contact form
pub struct ContactForm<P: Presenter> {
    state: FormState,
    counter: CharacterCounter,
    success_notice_delay: Duration,
    presenter: P,
}

impl<P: Presenter> ContactForm<P> {
    /// Build the form and render the initial character count
    pub fn new(presenter: P, config: &FormsConfig) -> Self {
        let min = config.message_min_length;
        let fields = vec![
            Field::new(FieldId::FULL_NAME, vec![Rule::required("Full name")]),
            Field::new(FieldId::EMAIL, vec![Rule::EmailFormat]),
            Field::new(
                FieldId::MESSAGE,
                vec![Rule::required("Message"), Rule::min_length("Message", min)],
            ),
        ];

        let mut form = Self {
            state: FormState::new(FormId::Contact, fields),
            counter: CharacterCounter::new(min, config.counter.clone()),
            success_notice_delay: config.success_notice_delay(),
            presenter,
        };
        form.refresh_counter();
        form
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.state.field(field).is_some()
    }

    /// Blur always validates
    pub fn blur(&mut self, field: &str) -> Result<(), FormError> {
        let field = self.state.field_mut(field)?;
        if field.validate() {
            self.presenter.show_field_status(field.id(), field.status());
        }
        Ok(())
    }

    /// Input re-validates only a field that is currently invalid
    pub fn input(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self.state.field_mut(field)?;
        field.set_value(value);

        if field.status().is_invalid() && field.validate() {
            self.presenter.show_field_status(field.id(), field.status());
        }

        if field.id() == FieldId::MESSAGE {
            self.refresh_counter();
        }
        Ok(())
    }

    /// Validate every field and, if all pass, move to `Submitting`
    pub fn request_submit(&mut self) -> SubmitRequest {
        let attempt = self.state.begin_submit();

        if attempt.gate == SubmitGate::InFlight {
            warn!("Contact form submit ignored: submission already in flight");
            return SubmitRequest::InFlight;
        }

        for id in &attempt.changed {
            if let Some(field) = self.state.field(id.as_str()) {
                self.presenter.show_field_status(field.id(), field.status());
            }
        }
        self.presenter.set_form_attempted(FormId::Contact, true);

        match attempt.gate {
            SubmitGate::Invalid { invalid_fields } => {
                debug!("Contact form rejected: {} invalid field(s)", invalid_fields);
                SubmitRequest::Rejected { invalid_fields }
            }
            _ => {
                info!("Contact form submitting");
                self.presenter
                    .show_submit_phase(FormId::Contact, SubmitPhase::Submitting);
                SubmitRequest::Dispatch(self.snapshot())
            }
        }
    }

    /// Apply the transport's result and return to `Idle`
    ///
    /// The submit button is restored on both paths.
    pub fn complete_submit(
        &mut self,
        result: Result<(), TransportError>,
    ) -> Result<SubmitOutcome, FormError> {
        let phase = self.state.settle(result.is_ok())?;
        self.presenter.show_submit_phase(FormId::Contact, phase);

        let outcome = match result {
            Ok(()) => {
                info!("Contact form submitted");
                self.presenter.set_success_notice(FormId::Contact, true);
                for field in self.state.fields() {
                    self.presenter.set_field_value(field.id(), field.value());
                    self.presenter
                        .show_field_status(field.id(), &FieldStatus::Unvalidated);
                }
                self.presenter.set_form_attempted(FormId::Contact, false);
                self.refresh_counter();

                SubmitOutcome::Succeeded {
                    follow_up: Deferred {
                        delay: self.success_notice_delay,
                        effect: DeferredEffect::HideSuccessNotice,
                    },
                }
            }
            Err(error) => {
                error!("Form submission error: {}", error);
                self.presenter
                    .show_failure_notice(FormId::Contact, TRANSPORT_FAILURE_NOTICE);
                SubmitOutcome::Failed { error }
            }
        };

        self.state.finish();
        self.presenter
            .show_submit_phase(FormId::Contact, SubmitPhase::Idle);
        Ok(outcome)
    }

    /// Full submit: guard, transport, settle
    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmitOutcome, FormError>
    where
        T: SubmissionTransport + ?Sized,
    {
        match self.request_submit() {
            SubmitRequest::Dispatch(submission) => {
                debug!("Dispatching contact submission via {}", transport.name());
                let result = transport.submit(&submission).await;
                self.complete_submit(result)
            }
            SubmitRequest::Rejected { invalid_fields } => {
                Ok(SubmitOutcome::Rejected { invalid_fields })
            }
            SubmitRequest::InFlight => Ok(SubmitOutcome::InFlight),
        }
    }

    pub fn hide_success_notice(&mut self) {
        self.presenter.set_success_notice(FormId::Contact, false);
    }

    fn refresh_counter(&mut self) {
        let value = self
            .state
            .field(FieldId::MESSAGE.as_str())
            .map(Field::value)
            .unwrap_or_default();
        let display = self.counter.render(value);
        self.presenter.show_counter(&display);
    }

    fn snapshot(&self) -> ContactSubmission {
        let value_of = |id: FieldId| {
            self.state
                .field(id.as_str())
                .map(|f| f.value().trim().to_string())
                .unwrap_or_default()
        };

        ContactSubmission {
            full_name: value_of(FieldId::FULL_NAME),
            email: value_of(FieldId::EMAIL),
            message: value_of(FieldId::MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{PresenterCall, RecordingPresenter};

    fn contact() -> ContactForm<RecordingPresenter> {
        ContactForm::new(RecordingPresenter::new(), &FormsConfig::default())
    }

    #[test]
    fn test_counter_rendered_at_init() {
        let form = contact();
        let counter = form.presenter().last_counter().unwrap();
        assert_eq!(counter.count, 0);
        assert_eq!(counter.color, "#6b7280");
    }

    #[test]
    fn test_input_does_not_validate_untouched_field() {
        let mut form = contact();
        form.presenter_mut().take();

        form.input("fullName", "").unwrap();

        assert!(form.presenter().calls().is_empty());
        assert_eq!(
            form.state().field("fullName").unwrap().status(),
            &FieldStatus::Unvalidated
        );
    }

    #[test]
    fn test_input_revalidates_invalid_field_live() {
        let mut form = contact();
        form.blur("email").unwrap();
        assert!(form.presenter().last_status(FieldId::EMAIL).unwrap().is_invalid());

        form.input("email", "jane@").unwrap();
        assert_eq!(
            form.presenter()
                .last_status(FieldId::EMAIL)
                .and_then(FieldStatus::message)
                .as_deref(),
            Some("Please enter a valid email address")
        );

        form.input("email", "jane@example.com").unwrap();
        assert_eq!(
            form.presenter().last_status(FieldId::EMAIL),
            Some(&FieldStatus::Valid)
        );
    }

    #[test]
    fn test_input_on_valid_field_waits_for_blur() {
        let mut form = contact();
        form.input("email", "jane@example.com").unwrap();
        form.blur("email").unwrap();
        form.presenter_mut().take();

        form.input("email", "jane@").unwrap();
        assert!(form.presenter().calls().is_empty());

        form.blur("email").unwrap();
        assert!(form.presenter().last_status(FieldId::EMAIL).unwrap().is_invalid());
    }

    #[test]
    fn test_blur_is_idempotent() {
        let mut form = contact();
        form.input("fullName", "Jane").unwrap();
        form.blur("fullName").unwrap();
        let before = form.presenter().calls().len();

        form.blur("fullName").unwrap();

        assert_eq!(form.presenter().calls().len(), before);
    }

    #[test]
    fn test_message_input_updates_counter() {
        let mut form = contact();
        form.input("message", "a".repeat(20)).unwrap();
        let counter = form.presenter().last_counter().unwrap();
        assert_eq!(counter.count, 20);
        assert_eq!(counter.color, "#198754");
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let mut form = contact();
        assert!(form.blur("phone").is_err());
    }

    #[test]
    fn test_complete_without_request_is_rejected() {
        let mut form = contact();
        assert!(matches!(
            form.complete_submit(Ok(())),
            Err(FormError::NotSubmitting(SubmitPhase::Idle))
        ));
        assert!(!form
            .presenter()
            .calls()
            .iter()
            .any(|c| matches!(c, PresenterCall::SuccessNotice(..))));
    }
}
