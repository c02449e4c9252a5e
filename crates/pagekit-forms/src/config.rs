// File: pagekit-forms/src/config.rs
// Purpose: Tunables for the form controllers

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Form controller configuration (`[forms]` in pagekit.toml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Minimum trimmed length of the contact message
    #[serde(default = "default_message_min_length")]
    pub message_min_length: usize,

    /// How long the contact success notice stays visible
    #[serde(default = "default_success_notice_ms")]
    pub success_notice_ms: u64,

    /// How long the newsletter button keeps its "subscribed" look
    #[serde(default = "default_subscribed_reset_ms")]
    pub subscribed_reset_ms: u64,

    #[serde(default)]
    pub counter: CounterConfig,

    #[serde(default)]
    pub transport: TransportConfig,
}

/// Character counter colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_satisfied_color")]
    pub satisfied_color: String,

    #[serde(default = "default_muted_color")]
    pub muted_color: String,
}

/// Simulated submission transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// When set, every submission is rejected with this reason
    #[serde(default)]
    pub fail_with: Option<String>,
}

fn default_message_min_length() -> usize {
    20
}

fn default_success_notice_ms() -> u64 {
    5000
}

fn default_subscribed_reset_ms() -> u64 {
    3000
}

fn default_satisfied_color() -> String {
    "#198754".to_string()
}

fn default_muted_color() -> String {
    "#6b7280".to_string()
}

fn default_latency_ms() -> u64 {
    1500
}

impl FormsConfig {
    pub fn success_notice_delay(&self) -> Duration {
        Duration::from_millis(self.success_notice_ms)
    }

    pub fn subscribed_reset_delay(&self) -> Duration {
        Duration::from_millis(self.subscribed_reset_ms)
    }
}

impl TransportConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            message_min_length: default_message_min_length(),
            success_notice_ms: default_success_notice_ms(),
            subscribed_reset_ms: default_subscribed_reset_ms(),
            counter: CounterConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            satisfied_color: default_satisfied_color(),
            muted_color: default_muted_color(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            fail_with: None,
        }
    }
}
