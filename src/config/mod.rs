pub mod model;

use crate::dashboard::settings::{parse_hours, parse_target};
use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

pub use model::AppConfig;

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studycoach")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    validate(&config).with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Reject values the UI cannot render and goals the settings screen would refuse.
fn validate(config: &AppConfig) -> Result<()> {
    let format = &config.ui.date_format;
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("ui.date_format {format:?} is not a valid date format");
    }
    let hours = config.defaults.study_hours;
    if parse_hours(&hours.to_string()).is_err() {
        bail!("defaults.study_hours must be between 0.5 and 12 in half-hour steps, got {hours}");
    }
    let target = config.defaults.flashcard_target;
    if parse_target(&target.to_string()).is_err() {
        bail!("defaults.flashcard_target must be between 5 and 200 in steps of 5, got {target}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.defaults.study_hours, 2.0);
        assert_eq!(cfg.defaults.flashcard_target, 20);
        assert_eq!(cfg.ui.tick_rate_ms, 50);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nflashcard_target = 35\n\n[logging]\nenabled = true").unwrap();
        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.defaults.flashcard_target, 35);
        assert_eq!(cfg.defaults.study_hours, 2.0);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.ui.show_key_hints);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults\nstudy_hours = ").unwrap();
        let err = load_config_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_bad_date_format_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ndate_format = \"%Q\"").unwrap();
        let err = load_config_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        assert!(format!("{err:#}").contains("date_format"));
    }

    #[test]
    fn test_custom_date_format_is_accepted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ndate_format = \"%d/%m/%Y\"").unwrap();
        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.ui.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_out_of_range_defaults_are_rejected() {
        for body in [
            "[defaults]\nstudy_hours = 20.0",
            "[defaults]\nstudy_hours = 1.25",
            "[defaults]\nflashcard_target = 300",
            "[defaults]\nflashcard_target = 12",
        ] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "{body}").unwrap();
            let err = load_config_from(file.path()).unwrap_err();
            assert!(format!("{err:#}").contains("defaults."), "{body}");
        }
    }

    #[test]
    fn test_boundary_defaults_are_accepted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nstudy_hours = 12.0\nflashcard_target = 200").unwrap();
        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.defaults.study_hours, 12.0);
        assert_eq!(cfg.defaults.flashcard_target, 200);
    }
}
