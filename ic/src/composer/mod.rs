//! Intention composer
//!
//! - [`form`] - form fields, validation, sentence formatting
//! - [`core`] - submission through the host collaborators

pub mod core;
pub mod form;

pub use self::core::{Composer, OutputAction, SubmitError, Submission};
pub use self::form::{IntentionForm, MOOD_SEPARATOR, ValidationError};
