//! Host collaborators the composer hands its results to
//!
//! The composer never talks to the terminal or the OS directly. It goes
//! through three narrow traits:
//!
//! - [`Clipboard`] - copy to the system clipboard, or paste into the
//!   application that launched us
//! - [`Notifier`] - transient success messages
//! - [`Window`] - close our own surface and drop pending navigation

mod clipboard;
mod notifier;
mod window;

pub use clipboard::SystemClipboard;
pub use notifier::TerminalNotifier;
pub use window::HeadlessWindow;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the clipboard collaborator
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to set clipboard: {0}")]
    Write(String),

    #[error("Failed to paste: {0}")]
    Paste(#[from] std::io::Error),
}

/// Errors from the window collaborator
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Failed to restore terminal: {0}")]
    Restore(#[from] std::io::Error),
}

/// Destination for the composed sentence
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Place `text` on the system clipboard
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;

    /// Insert `text` at the input focus of the previously active application
    async fn paste(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Shows transient success messages
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
}

/// Lifecycle of the program's own surface
#[async_trait]
pub trait Window: Send {
    /// Close immediately, returning focus to whatever was active and
    /// discarding any pending navigation back to the root view
    async fn close(&mut self) -> Result<(), WindowError>;
}
