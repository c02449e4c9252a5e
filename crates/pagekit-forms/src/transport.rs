//! Submission transport for the contact form

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::config::TransportConfig;
use crate::error::TransportError;

/// Snapshot of the contact form taken when a submission is dispatched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

/// Sends a contact submission somewhere
///
/// Implementations may take any amount of time; callers make no latency
/// assumptions.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), TransportError>;

    /// Transport name for logging
    fn name(&self) -> &'static str;
}

/// Transport that waits a fixed latency, then succeeds (or fails if configured to)
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
    fail_with: Option<String>,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail_with: None,
        }
    }

    pub fn from_config(config: &TransportConfig) -> Self {
        Self {
            latency: config.latency(),
            fail_with: config.fail_with.clone(),
        }
    }

    /// Reject every submission with `reason`
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        tracing::debug!(
            "Simulating submission from {} ({} ms)",
            submission.email,
            self.latency.as_millis()
        );
        tokio::time::sleep(self.latency).await;

        match &self.fail_with {
            Some(reason) => Err(TransportError::new(reason.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
