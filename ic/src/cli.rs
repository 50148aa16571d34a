//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::composer::OutputAction;

/// Intention - say what you want to do, and why, before you do it
#[derive(Parser)]
#[command(
    name = "intention",
    about = "Compose an intention sentence and copy or paste it",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Comma-separated moods, overrides `custom-moods` from the config
    #[arg(long, global = true, value_name = "LIST")]
    pub moods: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compose an intention without opening the form
    Compose {
        /// What you want to do
        #[arg(short, long, default_value = "")]
        task: String,

        /// Mood to adopt (repeat for several, order is kept)
        #[arg(short, long, value_name = "MOOD")]
        mood: Vec<String>,

        /// Why you are doing it
        #[arg(short, long, default_value = "")]
        reason: String,

        /// Paste into the calling application instead of copying
        #[arg(long)]
        paste: bool,

        /// Print the sentence and exit without copying or pasting
        #[arg(long, conflicts_with = "paste")]
        dry_run: bool,
    },

    /// List the configured moods
    Moods,
}

impl Command {
    /// Output action selected by `compose` flags
    pub fn output_action(paste: bool) -> OutputAction {
        debug!(paste, "Command::output_action: called");
        if paste { OutputAction::Paste } else { OutputAction::Copy }
    }
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    debug!("get_log_path: called");
    let path = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intention")
        .join("logs")
        .join("intention.log");
    debug!(?path, "get_log_path: returning path");
    path
}

/// Generate the after_help text with the key bindings and log location
pub fn generate_after_help() -> String {
    debug!("generate_after_help: called");
    let mut help = String::new();

    help.push_str("Form keys:\n");
    for (key, action) in [
        ("Ctrl+P", OutputAction::Paste.title()),
        ("Ctrl+Y", OutputAction::Copy.title()),
        ("Tab", "Next field"),
        ("Esc", "Cancel"),
    ] {
        help.push_str(&format!("  {:<8} {}\n", key, action));
    }

    help.push('\n');
    help.push_str(&format!("Logs are written to: {}\n", get_log_path().display()));

    debug!("generate_after_help: returning help text");
    help
}
