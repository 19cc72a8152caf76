use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;
use storybook_core::NumeralSystem;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    gestures: GestureConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    keys: KeyConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            numerals: tables.appearance.numerals,
            max_book_width: tables.appearance.max_book_width,
            window_width: tables.window.width,
            window_height: tables.window.height,
            settle_delay_ms: tables.navigation.settle_delay_ms,
            swipe_threshold_px: tables.gestures.swipe_threshold_px,
            tilt_max_degrees: tables.gestures.tilt_max_degrees,
            story_path: tables.content.story_path,
            assets_dir: tables.content.assets_dir,
            key_next_page: tables.keys.next_page,
            key_previous_page: tables.keys.previous_page,
            key_go_home: tables.keys.go_home,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_numerals")]
    numerals: NumeralSystem,
    #[serde(default = "defaults::default_max_book_width")]
    max_book_width: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            numerals: defaults::default_numerals(),
            max_book_width: defaults::default_max_book_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_settle_delay_ms")]
    settle_delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            settle_delay_ms: defaults::default_settle_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GestureConfig {
    #[serde(default = "defaults::default_swipe_threshold_px")]
    swipe_threshold_px: f32,
    #[serde(default = "defaults::default_tilt_max_degrees")]
    tilt_max_degrees: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig {
            swipe_threshold_px: defaults::default_swipe_threshold_px(),
            tilt_max_degrees: defaults::default_tilt_max_degrees(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ContentConfig {
    #[serde(default = "defaults::default_story_path")]
    story_path: String,
    #[serde(default = "defaults::default_assets_dir")]
    assets_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            story_path: defaults::default_story_path(),
            assets_dir: defaults::default_assets_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeyConfig {
    #[serde(default = "defaults::default_key_next_page")]
    next_page: String,
    #[serde(default = "defaults::default_key_previous_page")]
    previous_page: String,
    #[serde(default = "defaults::default_key_go_home")]
    go_home: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            next_page: defaults::default_key_next_page(),
            previous_page: defaults::default_key_previous_page(),
            go_home: defaults::default_key_go_home(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
