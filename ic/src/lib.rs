//! Intention - compose a one-sentence intention before starting a task
//!
//! The user fills in what they want to do, the mindsets they need, and why.
//! The composer turns that into a sentence of the form
//! `I want to <task> with a mindset of <moods> because <reason>: ` and
//! either copies it to the clipboard or pastes it into the calling
//! application.
//!
//! # Modules
//!
//! - [`mood`] - Mood catalog parsed from configuration
//! - [`composer`] - Validation, sentence formatting, submission
//! - [`host`] - Clipboard, notification and window collaborators
//! - [`tui`] - Terminal form
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod composer;
pub mod config;
pub mod host;
pub mod mood;
pub mod tui;

// Re-export commonly used types
pub use composer::{Composer, IntentionForm, OutputAction, SubmitError, Submission, ValidationError};
pub use config::Config;
pub use host::{Clipboard, ClipboardError, HeadlessWindow, Notifier, SystemClipboard, TerminalNotifier, Window, WindowError};
pub use mood::MoodCatalog;
