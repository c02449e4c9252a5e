// File: src/script.rs
// Purpose: Scripted page sessions for `pagekit replay`

use anyhow::{Context, Result};
use pagekit_page::{PageLayout, UserEvent};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// A page layout plus the steps to play against it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub layout: PageLayout,

    #[serde(default, rename = "step")]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Let the page run for a while
    Wait { wait_ms: u64 },
    Event(UserEvent),
}

impl ScriptStep {
    pub fn wait(&self) -> Option<Duration> {
        match self {
            ScriptStep::Wait { wait_ms } => Some(Duration::from_millis(*wait_ms)),
            ScriptStep::Event(_) => None,
        }
    }
}

impl Script {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse replay script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid script: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_forms::FormId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_script() {
        let script = Script::parse(
            r##"
            [layout]
            nav_links = ["#home"]

            [[layout.sections]]
            id = "home"
            top = 0.0
            height = 600.0

            [[step]]
            event = "input"
            field = "newsletterEmail"
            value = "reader@example.org"

            [[step]]
            event = "submit"
            form = "newsletter"

            [[step]]
            wait_ms = 3000

            [[step]]
            event = "resize"
            width = 1024
            height = 768
            "##,
        )
        .unwrap();

        assert_eq!(script.layout.sections.len(), 1);
        assert_eq!(script.steps.len(), 4);
        assert_eq!(
            script.steps[1],
            ScriptStep::Event(UserEvent::Submit {
                form: FormId::Newsletter
            })
        );
        assert_eq!(script.steps[2].wait(), Some(Duration::from_secs(3)));
        assert_eq!(
            script.steps[3],
            ScriptStep::Event(UserEvent::Resize {
                width: 1024,
                height: 768
            })
        );
    }

    #[test]
    fn test_empty_script() {
        let script = Script::parse("").unwrap();
        assert!(script.steps.is_empty());
        assert!(script.layout.sections.is_empty());
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert!(Script::parse("[[step]]\nevent = \"teleport\"").is_err());
    }
}
