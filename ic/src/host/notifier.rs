//! Success messages on stderr

use colored::Colorize;
use tracing::debug;

use super::Notifier;

/// Prints `✔ <message>` in green on stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        debug!(%message, "TerminalNotifier::success: called");
        eprintln!("{} {}", "\u{2714}".green().bold(), message.green());
    }
}
