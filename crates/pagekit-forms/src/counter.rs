//! Character counter for the message field

use pagekit_validation::char_len;
use serde::Serialize;

use crate::config::CounterConfig;

/// Visual tone of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CounterTone {
    /// Below the minimum length
    Muted,
    /// Minimum length reached
    Satisfied,
}

/// What the counter shows for a given value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterDisplay {
    pub count: usize,
    pub tone: CounterTone,
    pub color: String,
}

/// Pure projection of a field value onto the counter display
#[derive(Debug, Clone)]
pub struct CharacterCounter {
    threshold: usize,
    colors: CounterConfig,
}

impl CharacterCounter {
    pub fn new(threshold: usize, colors: CounterConfig) -> Self {
        Self { threshold, colors }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Counts the raw (untrimmed) value
    pub fn render(&self, value: &str) -> CounterDisplay {
        let count = char_len(value);
        let tone = if count >= self.threshold {
            CounterTone::Satisfied
        } else {
            CounterTone::Muted
        };
        let color = match tone {
            CounterTone::Satisfied => self.colors.satisfied_color.clone(),
            CounterTone::Muted => self.colors.muted_color.clone(),
        };

        CounterDisplay { count, tone, color }
    }
}
