use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

/// Parse the sectioned TOML form and clamp values into usable ranges.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("config is not valid TOML")?;
    Ok(AppConfig::from(tables).sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::config::models::LogLevel;
    use storybook_core::NumeralSystem;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.settle_delay_ms, 500);
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.key_go_home, "escape");
    }

    #[test]
    fn reads_sectioned_tables() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "night"
            numerals = "odia"

            [navigation]
            settle_delay_ms = 650

            [gestures]
            swipe_threshold_px = 72.5

            [keys]
            go_home = "q"

            [logging]
            log_level = "trace"
            "#,
        )
        .expect("config");
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.numerals, NumeralSystem::Odia);
        assert_eq!(config.settle_delay_ms, 650);
        assert_eq!(config.swipe_threshold_px, 72.5);
        assert_eq!(config.key_go_home, "q");
        assert_eq!(config.key_next_page, "arrowright");
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let config = parse_config(
            r#"
            [navigation]
            settle_delay_ms = 1

            [gestures]
            swipe_threshold_px = 9000.0
            tilt_max_degrees = -3.0
            "#,
        )
        .expect("config");
        assert_eq!(config.settle_delay_ms, 50);
        assert_eq!(config.swipe_threshold_px, 400.0);
        assert_eq!(config.tilt_max_degrees, 0.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("[navigation\nsettle_delay_ms = ").is_err());
        assert!(parse_config("[logging]\nlog_level = \"loud\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "storybook-missing-config-{}.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
