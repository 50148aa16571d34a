//! Intention - compose a one-sentence intention
//!
//! CLI entry point: opens the form by default, or composes non-interactively.

use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches};
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use intention::cli::{Cli, Command, generate_after_help, get_log_path};
use intention::composer::{Composer, IntentionForm, SubmitError};
use intention::config::Config;
use intention::host::{HeadlessWindow, SystemClipboard, TerminalNotifier};
use intention::mood::MoodCatalog;
use intention::tui;

/// Exit code for a form that failed validation
const EXIT_VALIDATION: i32 = 2;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_path = get_log_path();
    let log_dir = log_path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Build command with dynamic after_help that shows key bindings and log path
    let cmd = Cli::command().after_help(generate_after_help());

    // Parse CLI arguments using the modified command
    let cli = Cli::from_arg_matches(&cmd.get_matches())?;

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // --moods overrides the configured catalog for this run
    let catalog = match cli.moods.as_deref() {
        Some(raw) => {
            debug!(%raw, "main: using --moods override");
            MoodCatalog::parse(raw)
        }
        None => config.mood_catalog(),
    };
    info!(moods = catalog.len(), "Intention loaded mood catalog");

    let composer = Composer::new(catalog);

    // Dispatch command
    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Compose {
            task,
            mood,
            reason,
            paste,
            dry_run,
        }) => {
            debug!(%task, ?mood, %reason, paste, dry_run, "main: matched Compose command");
            cmd_compose(&composer, IntentionForm::new(task, mood, reason), paste, dry_run).await
        }
        Some(Command::Moods) => {
            debug!("main: matched Moods command");
            cmd_moods(&composer)
        }
        None => {
            debug!("main: no command specified, opening form");
            cmd_form(composer).await
        }
    }
}

/// Open the interactive form
async fn cmd_form(composer: Composer) -> Result<()> {
    debug!("cmd_form: called");
    let submission = tui::run(
        composer,
        Box::new(SystemClipboard::new()),
        Box::new(TerminalNotifier::new()),
    )
    .await?;

    match submission {
        Some(submission) => info!(action = ?submission.action, "cmd_form: intention delivered"),
        None => info!("cmd_form: form cancelled"),
    }
    Ok(())
}

/// Compose without the form
async fn cmd_compose(composer: &Composer, form: IntentionForm, paste: bool, dry_run: bool) -> Result<()> {
    debug!(paste, dry_run, "cmd_compose: called");

    for label in &form.mood {
        if !composer.catalog().contains(label) {
            warn!(%label, "cmd_compose: mood is not in the catalog");
        }
    }

    if dry_run {
        match composer.compose(&form) {
            Ok(sentence) => {
                println!("{}", sentence);
                return Ok(());
            }
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(EXIT_VALIDATION);
            }
        }
    }

    let action = Command::output_action(paste);
    let result = composer
        .submit(
            &form,
            action,
            &SystemClipboard::new(),
            &TerminalNotifier::new(),
            &mut HeadlessWindow,
        )
        .await;

    match result {
        Ok(submission) => {
            info!(action = ?submission.action, "cmd_compose: intention delivered");
            Ok(())
        }
        Err(SubmitError::Validation(err)) => {
            eprintln!("{}", err);
            std::process::exit(EXIT_VALIDATION);
        }
        Err(err) => Err(err).context(format!("Failed to {}", action.title().to_lowercase())),
    }
}

/// Print the mood catalog, one label per line
fn cmd_moods(composer: &Composer) -> Result<()> {
    debug!("cmd_moods: called");
    for label in composer.catalog().labels() {
        println!("{}", label);
    }
    Ok(())
}
