//! Intention configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::mood::MoodCatalog;

/// Project-local config file name
pub const LOCAL_CONFIG: &str = ".intention.yml";

/// Main intention configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comma-separated mood labels offered in the tag picker
    #[serde(rename = "custom-moods")]
    pub custom_moods: String,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

/// Only the log level, read before logging is set up
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogLevelOnly {
    #[serde(rename = "log-level")]
    log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::implicit_paths() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level, ignoring every error
    ///
    /// Runs before logging exists, so failures are silent; [`Config::load`]
    /// reports them once logging is up.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::implicit_paths(),
        };

        candidates
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| {
                let content = fs::read_to_string(p).ok()?;
                serde_yaml::from_str::<LogLevelOnly>(&content).ok()
            })
            .and_then(|c| c.log_level)
    }

    /// Mood catalog derived from `custom-moods`
    pub fn mood_catalog(&self) -> MoodCatalog {
        MoodCatalog::parse(&self.custom_moods)
    }

    /// Project-local then user config locations
    fn implicit_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        // ~/.config/intention/intention.yml
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("intention").join("intention.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
