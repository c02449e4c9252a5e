//! Events delivered to the page runtime

use pagekit_forms::{DeferredEffect, FormId, TransportError};
use serde::{Deserialize, Serialize};

/// Something the user (or the browser on their behalf) did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum UserEvent {
    Input { field: String, value: String },
    Blur { field: String },
    Submit { form: FormId },
    Scroll { y: f64 },
    /// Click on an in-page anchor (`href` starting with `#`)
    LinkClick { href: String },
    ToggleMenu,
    KeyDown { key: String },
    /// An observed element entered the viewport
    Intersect { element: String },
    Resize { width: u32, height: u32 },
    VisibilityChange { hidden: bool },
}

/// Everything the runtime reacts to, one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    User(UserEvent),
    /// A deferred presenter effect came due
    Timer(DeferredEffect),
    /// The contact transport finished
    ContactSettled(Result<(), TransportError>),
    /// The resize debounce period for `generation` ended
    ResizeSettled { generation: u64 },
}

impl From<UserEvent> for PageEvent {
    fn from(event: UserEvent) -> Self {
        PageEvent::User(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_event_from_toml() {
        let event: UserEvent = toml::from_str(
            r#"
            event = "input"
            field = "fullName"
            value = "Jane"
            "#,
        )
        .unwrap();
        assert_eq!(
            event,
            UserEvent::Input {
                field: "fullName".to_string(),
                value: "Jane".to_string()
            }
        );

        let submit: UserEvent = toml::from_str("event = \"submit\"\nform = \"contact\"").unwrap();
        assert_eq!(
            submit,
            UserEvent::Submit {
                form: FormId::Contact
            }
        );

        let key: UserEvent = toml::from_str("event = \"key-down\"\nkey = \"Escape\"").unwrap();
        assert!(matches!(key, UserEvent::KeyDown { .. }));
    }
}
