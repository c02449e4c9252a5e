// File: src/config.rs
// Purpose: Configuration parsing from pagekit.toml

use anyhow::{Context, Result};
use pagekit_forms::FormsConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Quiet period before a burst of resize events is acted on
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,

    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub nav: NavConfig,
}

/// Navigation offsets, in CSS pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Scroll distance after which the navbar switches to its compact style
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,

    /// How far above a section its highlight starts
    #[serde(default = "default_section_offset")]
    pub section_offset: f64,

    /// Space left above a section when scrolling to it (fixed navbar height)
    #[serde(default = "default_scroll_offset")]
    pub scroll_offset: f64,
}

// Default values
fn default_resize_debounce_ms() -> u64 {
    250
}

fn default_scroll_threshold() -> f64 {
    10.0
}

fn default_section_offset() -> f64 {
    100.0
}

fn default_scroll_offset() -> f64 {
    80.0
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: default_resize_debounce_ms(),
            forms: FormsConfig::default(),
            nav: NavConfig::default(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            section_offset: default_section_offset(),
            scroll_offset: default_scroll_offset(),
        }
    }
}

impl PageConfig {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: PageConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./pagekit.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("pagekit.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert_eq!(config.nav.scroll_threshold, 10.0);
        assert_eq!(config.nav.scroll_offset, 80.0);
        assert_eq!(config.forms.message_min_length, 20);
    }

    #[test]
    fn test_nested_sections() {
        let toml = r#"
            resize_debounce_ms = 100

            [nav]
            scroll_offset = 64.0

            [forms]
            success_notice_ms = 1000

            [forms.counter]
            satisfied_color = "green"
        "#;
        let config: PageConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.resize_debounce_ms, 100);
        assert_eq!(config.nav.scroll_offset, 64.0);
        assert_eq!(config.nav.section_offset, 100.0);
        assert_eq!(config.forms.success_notice_ms, 1000);
        assert_eq!(config.forms.counter.satisfied_color, "green");
        assert_eq!(config.forms.counter.muted_color, "#6b7280");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = PageConfig::load("does/not/exist/pagekit.toml").unwrap();
        assert_eq!(config, PageConfig::default());
    }
}
