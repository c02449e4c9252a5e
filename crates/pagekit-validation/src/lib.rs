//! pagekit Validation Core
//!
//! Pure validation functions for the contact and newsletter forms.
//! Compatible with both std and no_std environments so the same rules can run
//! natively and inside a browser build.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod email;
pub mod error;
pub mod rule;
pub mod string;

// Re-export all validators
pub use email::*;
pub use error::ValidationError;
pub use rule::{validate_rules, Rule};
pub use string::*;
