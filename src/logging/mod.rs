//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to a daily log file named
//! `studycoach_<date>.log` in the configured log directory (default:
//! `~/.local/share/studycoach/logs/`). Nothing is printed to the terminal,
//! which belongs to the UI.

use crate::config::model::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level: tracing::Level = config
        .level
        .parse()
        .map_err(|e| anyhow!("Invalid log level {:?}: {}", config.level, e))?;

    let log_dir = expand_log_dir(&config.log_dir, dirs::home_dir().as_deref());
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_dir.join(log_file_name(&date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}

fn log_file_name(date: &str) -> String {
    format!("studycoach_{}.log", date)
}

/// Expand a leading `~` against `home`.
fn expand_log_dir(dir: &str, home: Option<&Path>) -> PathBuf {
    match (dir.strip_prefix('~'), home) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches(['/', '\\'])),
        _ => PathBuf::from(dir),
    }
}
