// File: pagekit-forms/src/newsletter.rs
// Purpose: Newsletter signup - single email field, synchronous success

use pagekit_validation::Rule;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::FormsConfig;
use crate::field::{Field, FieldId, FieldStatus};
use crate::presenter::{Deferred, DeferredEffect, Presenter};

/// Result of a newsletter submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterOutcome {
    /// Email invalid; the error is shown on the field
    Rejected,
    /// Subscribed; `follow_up` reverts the button
    Subscribed { follow_up: Deferred },
}

/// Controller for the newsletter form
pub struct NewsletterForm<P: Presenter> {
    email: Field,
    reset_delay: Duration,
    presenter: P,
}

impl<P: Presenter> NewsletterForm<P> {
    pub fn new(presenter: P, config: &FormsConfig) -> Self {
        Self {
            email: Field::new(FieldId::NEWSLETTER_EMAIL, vec![Rule::EmailFormat]),
            reset_delay: config.subscribed_reset_delay(),
            presenter,
        }
    }

    pub fn field(&self) -> &Field {
        &self.email
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Input re-validates only while the field is invalid
    pub fn input(&mut self, value: impl Into<String>) {
        self.email.set_value(value);

        if self.email.status().is_invalid() && self.email.validate() {
            self.presenter
                .show_field_status(self.email.id(), self.email.status());
        }
    }

    pub fn submit(&mut self) -> NewsletterOutcome {
        if self.email.validate() {
            self.presenter
                .show_field_status(self.email.id(), self.email.status());
        }

        if !self.email.status().is_valid() {
            debug!("Newsletter signup rejected: {:?}", self.email.status().message());
            return NewsletterOutcome::Rejected;
        }

        info!("Newsletter signup accepted");
        self.presenter.set_subscribed(true);

        self.email.reset();
        self.presenter.set_field_value(self.email.id(), "");
        self.presenter
            .show_field_status(self.email.id(), &FieldStatus::Unvalidated);

        NewsletterOutcome::Subscribed {
            follow_up: Deferred {
                delay: self.reset_delay,
                effect: DeferredEffect::ClearSubscribed,
            },
        }
    }

    pub fn clear_subscribed(&mut self) {
        self.presenter.set_subscribed(false);
    }
}
