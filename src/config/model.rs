//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` so they map onto `config.toml`.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub defaults: StudyDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between ticks, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// `chrono` format string used for the exam deadline.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            date_format: default_date_format(),
            show_key_hints: true,
        }
    }
}

/// Starting goals for a newly created or logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDefaults {
    #[serde(default = "default_study_hours")]
    pub study_hours: f32,
    #[serde(default = "default_flashcard_target")]
    pub flashcard_target: u32,
}

impl Default for StudyDefaults {
    fn default() -> Self {
        Self {
            study_hours: default_study_hours(),
            flashcard_target: default_flashcard_target(),
        }
    }
}

/// Diagnostic log settings. The log goes to a file because the terminal is
/// owned by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    50
}
pub(crate) fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}
fn default_study_hours() -> f32 {
    2.0
}
fn default_flashcard_target() -> u32 {
    20
}
fn default_log_dir() -> String {
    "~/.local/share/studycoach/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
