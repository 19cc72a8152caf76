//! Entry point for the storybook viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Load user configuration from `conf/config.toml`.
//! - Resolve the story file (command line first, then config).
//! - Load the story and launch the GUI with it.

mod app;
mod config;
mod theme;

use crate::app::run_app;
use crate::config::{AppConfig, load_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use storybook_core::{ContentProvider, load_story};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let story_path = parse_args(env::args().skip(1), &config)?;
    info!(
        path = %story_path.display(),
        level = %config.log_level,
        theme = %config.theme,
        numerals = %config.numerals,
        "Starting storybook viewer"
    );
    info!(
        settle_delay_ms = config.settle_delay_ms,
        swipe_threshold_px = config.swipe_threshold_px,
        tilt_max_degrees = config.tilt_max_degrees,
        assets = %config.assets_dir,
        "Active interaction configuration"
    );

    let story = load_story(&story_path)?;
    if story.chapter_count() == 0 {
        warn!("Story has no chapters; only the cover and contents page will show");
    }
    run_app(story, config).context("Failed to start the GUI")?;
    Ok(())
}

/// `storybook-viewer [path-to-story.json]`; the argument wins over the config.
fn parse_args(mut args: impl Iterator<Item = String>, config: &AppConfig) -> Result<PathBuf> {
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.story_path());
    if let Some(extra) = args.next() {
        return Err(anyhow!(
            "Unexpected argument {extra:?}\nUsage: storybook-viewer [path-to-story.json]"
        ));
    }
    if !path.exists() {
        return Err(anyhow!("Story file not found: {}", path.display()));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_story_is_reported_with_its_path() {
        let config = AppConfig {
            story_path: "definitely/not/here/story.json".to_string(),
            ..AppConfig::default()
        };
        let err = parse_args(std::iter::empty(), &config).expect_err("missing file");
        assert!(err.to_string().contains("definitely/not/here/story.json"));
    }

    #[test]
    fn command_line_path_wins_over_config() {
        let config = AppConfig {
            story_path: "definitely/not/here/story.json".to_string(),
            ..AppConfig::default()
        };
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let path = parse_args(std::iter::once(manifest.to_string()), &config).expect("path");
        assert_eq!(path, PathBuf::from(manifest));
    }

    #[test]
    fn bundled_story_is_valid() {
        let story = storybook_core::parse_story(include_str!("../content/story.json"))
            .expect("bundled story");
        assert_eq!(story.chapter_count(), 3);
        assert_eq!(story.labels.home, "ଆରମ୍ଭ");
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let args = ["a.json".to_string(), "b.json".to_string()].into_iter();
        assert!(parse_args(args, &AppConfig::default()).is_err());
    }
}
