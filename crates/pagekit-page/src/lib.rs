// File: pagekit-page/src/lib.rs
// Purpose: Main entry point for the page runtime

//! # pagekit page
//!
//! Headless runtime for the marketing page behavior layer.
//!
//! [`PageRuntime`] owns the contact and newsletter controllers, a [`Dom`]
//! snapshot they render into, and the navigation behaviors (navbar style,
//! section highlighting, smooth scrolling, fade-ins, lazy images). Events are
//! processed one at a time from a tokio channel; timers and the submission
//! transport run as spawned tasks that report back through the same channel.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit_page::{PageConfig, PageLayout, PageRuntime, UserEvent};
//! use pagekit_forms::{FormId, SimulatedTransport};
//! use std::sync::Arc;
//!
//! let config = PageConfig::load_default()?;
//! let transport = Arc::new(SimulatedTransport::from_config(&config.forms.transport));
//! let mut page = PageRuntime::new(config, PageLayout::default(), transport);
//!
//! page.dispatch(UserEvent::Submit { form: FormId::Newsletter });
//! page.settle().await?;
//! ```

pub mod config;
pub mod dom;
pub mod events;
pub mod nav;
pub mod runtime;

// Re-export main types
pub use config::{NavConfig, PageConfig};
pub use dom::{Dom, DomHandle, FieldView, FormView};
pub use events::{PageEvent, UserEvent};
pub use nav::{PageLayout, Section};
pub use runtime::PageRuntime;
