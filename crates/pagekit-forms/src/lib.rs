//! # pagekit forms
//!
//! Contact and newsletter form controllers for a marketing page.
//!
//! Controllers own their field state and write every visual change to an
//! injected [`Presenter`]. Nothing here knows about the DOM or an event loop:
//! events call controller methods, and anything that must happen later
//! (hiding a notice, reverting a button) is returned as a [`Deferred`] effect
//! for the caller to schedule.
//!
//! ## Example
//!
//! ```rust
//! use pagekit_forms::{ContactForm, FormsConfig, RecordingPresenter, SubmitRequest};
//!
//! let mut form = ContactForm::new(RecordingPresenter::new(), &FormsConfig::default());
//! form.input("fullName", "").unwrap();
//! form.input("email", "x@y.com").unwrap();
//! form.input("message", "short").unwrap();
//!
//! assert_eq!(form.request_submit(), SubmitRequest::Rejected { invalid_fields: 2 });
//! ```

pub mod config;
pub mod contact;
pub mod counter;
pub mod error;
pub mod field;
pub mod form;
pub mod newsletter;
pub mod presenter;
pub mod transport;

pub use config::{CounterConfig, FormsConfig, TransportConfig};
pub use contact::{ContactForm, SubmitOutcome, SubmitRequest, TRANSPORT_FAILURE_NOTICE};
pub use counter::{CharacterCounter, CounterDisplay, CounterTone};
pub use error::{FormError, TransportError};
pub use field::{Field, FieldId, FieldStatus};
pub use form::{FormId, FormState, SubmitAttempt, SubmitGate, SubmitPhase};
pub use newsletter::{NewsletterForm, NewsletterOutcome};
pub use presenter::{Deferred, DeferredEffect, Presenter, PresenterCall, RecordingPresenter};
pub use transport::{ContactSubmission, SimulatedTransport, SubmissionTransport};

pub use pagekit_validation::{Rule, ValidationError};
