use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use storybook_core::NumeralSystem;

/// High-level app configuration; the on-disk form is sectioned (see `tables`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub numerals: NumeralSystem,
    pub max_book_width: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub settle_delay_ms: u64,
    pub swipe_threshold_px: f32,
    pub tilt_max_degrees: f32,
    pub story_path: String,
    pub assets_dir: String,
    pub key_next_page: String,
    pub key_previous_page: String,
    pub key_go_home: String,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            numerals: defaults::default_numerals(),
            max_book_width: defaults::default_max_book_width(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            settle_delay_ms: defaults::default_settle_delay_ms(),
            swipe_threshold_px: defaults::default_swipe_threshold_px(),
            tilt_max_degrees: defaults::default_tilt_max_degrees(),
            story_path: defaults::default_story_path(),
            assets_dir: defaults::default_assets_dir(),
            key_next_page: defaults::default_key_next_page(),
            key_previous_page: defaults::default_key_previous_page(),
            key_go_home: defaults::default_key_go_home(),
            log_level: defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Clamp numeric settings into ranges the UI can work with.
    pub fn sanitized(mut self) -> Self {
        self.settle_delay_ms = self
            .settle_delay_ms
            .clamp(defaults::MIN_SETTLE_DELAY_MS, defaults::MAX_SETTLE_DELAY_MS);
        self.swipe_threshold_px = finite_or(
            self.swipe_threshold_px,
            defaults::default_swipe_threshold_px(),
        )
        .clamp(
            defaults::MIN_SWIPE_THRESHOLD_PX,
            defaults::MAX_SWIPE_THRESHOLD_PX,
        );
        self.tilt_max_degrees = finite_or(
            self.tilt_max_degrees,
            defaults::default_tilt_max_degrees(),
        )
        .clamp(0.0, defaults::MAX_TILT_DEGREES);
        self.max_book_width = finite_or(self.max_book_width, defaults::default_max_book_width())
            .max(defaults::MIN_BOOK_WIDTH);
        self.window_width =
            finite_or(self.window_width, defaults::default_window_width()).max(1.0);
        self.window_height =
            finite_or(self.window_height, defaults::default_window_height()).max(1.0);
        self
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn story_path(&self) -> PathBuf {
        PathBuf::from(&self.story_path)
    }

    pub fn assets_dir(&self) -> PathBuf {
        PathBuf::from(&self.assets_dir)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
