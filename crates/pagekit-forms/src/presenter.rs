// File: pagekit-forms/src/presenter.rs
// Purpose: Presentation-layer seam written to by the form controllers

use std::time::Duration;

use crate::counter::CounterDisplay;
use crate::field::{FieldId, FieldStatus};
use crate::form::{FormId, SubmitPhase};

/// Visual state changes emitted by the controllers
///
/// Implementations own the actual page elements; controllers receive one at
/// construction and never look elements up themselves.
pub trait Presenter {
    /// Mark a field valid, invalid (with its message) or neutral
    fn show_field_status(&mut self, field: FieldId, status: &FieldStatus);

    /// Replace the text of a field's input
    fn set_field_value(&mut self, field: FieldId, value: &str);

    /// Reveal (or hide) every field-level error on the form
    fn set_form_attempted(&mut self, form: FormId, attempted: bool);

    /// Submit button state: disabled with a loading indicator while `Submitting`
    fn show_submit_phase(&mut self, form: FormId, phase: SubmitPhase);

    /// Show or hide the success notice; showing also brings it into view
    fn set_success_notice(&mut self, form: FormId, visible: bool);

    /// Generic, non field-specific failure notice
    fn show_failure_notice(&mut self, form: FormId, message: &str);

    /// Newsletter button "subscribed" look
    fn set_subscribed(&mut self, subscribed: bool);

    fn show_counter(&mut self, display: &CounterDisplay);
}

/// A presenter change that must be applied after a fixed delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredEffect {
    HideSuccessNotice,
    ClearSubscribed,
}

/// A deferred effect together with its delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub effect: DeferredEffect,
}

/// One recorded presenter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    FieldStatus(FieldId, FieldStatus),
    FieldValue(FieldId, String),
    FormAttempted(FormId, bool),
    SubmitPhase(FormId, SubmitPhase),
    SuccessNotice(FormId, bool),
    FailureNotice(FormId, String),
    Subscribed(bool),
    Counter(CounterDisplay),
}

/// Presenter that records every call, for headless use and tests
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    /// Drain the recorded calls
    pub fn take(&mut self) -> Vec<PresenterCall> {
        std::mem::take(&mut self.calls)
    }

    /// Most recent status shown for a field
    pub fn last_status(&self, field: FieldId) -> Option<&FieldStatus> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::FieldStatus(id, status) if *id == field => Some(status),
            _ => None,
        })
    }

    /// Submit phases shown for a form, in order
    pub fn phases(&self, form: FormId) -> Vec<SubmitPhase> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PresenterCall::SubmitPhase(id, phase) if *id == form => Some(*phase),
                _ => None,
            })
            .collect()
    }

    pub fn last_counter(&self) -> Option<&CounterDisplay> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::Counter(display) => Some(display),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn show_field_status(&mut self, field: FieldId, status: &FieldStatus) {
        self.calls
            .push(PresenterCall::FieldStatus(field, status.clone()));
    }

    fn set_field_value(&mut self, field: FieldId, value: &str) {
        self.calls
            .push(PresenterCall::FieldValue(field, value.to_string()));
    }

    fn set_form_attempted(&mut self, form: FormId, attempted: bool) {
        self.calls.push(PresenterCall::FormAttempted(form, attempted));
    }

    fn show_submit_phase(&mut self, form: FormId, phase: SubmitPhase) {
        self.calls.push(PresenterCall::SubmitPhase(form, phase));
    }

    fn set_success_notice(&mut self, form: FormId, visible: bool) {
        self.calls.push(PresenterCall::SuccessNotice(form, visible));
    }

    fn show_failure_notice(&mut self, form: FormId, message: &str) {
        self.calls
            .push(PresenterCall::FailureNotice(form, message.to_string()));
    }

    fn set_subscribed(&mut self, subscribed: bool) {
        self.calls.push(PresenterCall::Subscribed(subscribed));
    }

    fn show_counter(&mut self, display: &CounterDisplay) {
        self.calls.push(PresenterCall::Counter(display.clone()));
    }
}
