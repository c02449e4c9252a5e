//! Navigation behaviors: navbar style, section highlighting, smooth scrolling
//!
//! Pure functions of scroll position and page layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A page section that nav links point at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Static page structure the runtime reacts to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub sections: Vec<Section>,

    /// `href` of each navbar link, e.g. `#about`
    #[serde(default)]
    pub nav_links: Vec<String>,

    /// Elements that fade in the first time they scroll into view
    #[serde(default)]
    pub fade_elements: Vec<String>,

    /// Lazily loaded images: element id to `data-src`
    #[serde(default)]
    pub lazy_images: BTreeMap<String, String>,
}

impl PageLayout {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Navbar switches to its scrolled style past the threshold
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The section currently under the navbar
///
/// Later sections win when ranges overlap.
pub fn active_section<'a>(scroll_y: f64, sections: &'a [Section], offset: f64) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Whether a nav link points at the active section
pub fn nav_link_active(href: &str, current: Option<&str>) -> bool {
    match (href.strip_prefix('#'), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Scroll position that puts a section just below the fixed navbar
pub fn smooth_scroll_target(section_top: f64, offset: f64) -> f64 {
    (section_top - offset).max(0.0)
}
