use storybook_core::NumeralSystem;
use storybook_core::gesture::DEFAULT_SWIPE_THRESHOLD;
use storybook_core::navigation::DEFAULT_SETTLE_DELAY;
use storybook_core::tilt::DEFAULT_MAX_TILT_DEGREES;

pub(crate) const MIN_SETTLE_DELAY_MS: u64 = 50;
pub(crate) const MAX_SETTLE_DELAY_MS: u64 = 5_000;
pub(crate) const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;
pub(crate) const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;
pub(crate) const MAX_TILT_DEGREES: f32 = 30.0;
pub(crate) const MIN_BOOK_WIDTH: f32 = 240.0;

pub(crate) fn default_numerals() -> NumeralSystem {
    NumeralSystem::Western
}

pub(crate) fn default_max_book_width() -> f32 {
    800.0
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    900.0
}

pub(crate) fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY.as_millis() as u64
}

pub(crate) fn default_swipe_threshold_px() -> f32 {
    DEFAULT_SWIPE_THRESHOLD
}

pub(crate) fn default_tilt_max_degrees() -> f32 {
    DEFAULT_MAX_TILT_DEGREES
}

pub(crate) fn default_story_path() -> String {
    "content/story.json".to_string()
}

pub(crate) fn default_assets_dir() -> String {
    "assets".to_string()
}

pub(crate) fn default_key_next_page() -> String {
    "arrowright".to_string()
}

pub(crate) fn default_key_previous_page() -> String {
    "arrowleft".to_string()
}

pub(crate) fn default_key_go_home() -> String {
    "escape".to_string()
}

pub(crate) fn default_log_level() -> super::models::LogLevel {
    super::models::LogLevel::Info
}
