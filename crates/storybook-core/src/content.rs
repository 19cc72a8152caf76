//! Story content loading.
//!
//! A story is a single JSON document: cover text, UI labels and the ordered
//! chapter list. Everything is normalized to NFC on load so that text typed
//! on different systems compares and renders the same way.

use crate::chapter::Chapter;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// Read-only access to the ordered chapter list.
pub trait ContentProvider {
    fn chapters(&self) -> &[Chapter];

    fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters().get(index)
    }

    fn chapter_count(&self) -> usize {
        self.chapters().len()
    }
}

impl ContentProvider for Vec<Chapter> {
    fn chapters(&self) -> &[Chapter] {
        self
    }
}

impl ContentProvider for [Chapter] {
    fn chapters(&self) -> &[Chapter] {
        self
    }
}

/// Text printed on the front cover.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CoverText {
    #[serde(default = "default_cover_title")]
    pub title: Vec<String>,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_open_hint")]
    pub open_hint: String,
    #[serde(default = "default_click_hint")]
    pub click_hint: String,
    #[serde(default)]
    pub credit: String,
}

impl Default for CoverText {
    fn default() -> Self {
        CoverText {
            title: default_cover_title(),
            subtitle: String::new(),
            open_hint: default_open_hint(),
            click_hint: default_click_hint(),
            credit: String::new(),
        }
    }
}

/// Fixed UI strings that belong to the book rather than to the app.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoryLabels {
    #[serde(default = "default_contents_label")]
    pub contents: String,
    #[serde(default = "default_chapter_label")]
    pub chapter: String,
    #[serde(default)]
    pub poetry: String,
    #[serde(default = "default_previous_label")]
    pub previous: String,
    #[serde(default = "default_home_label")]
    pub home: String,
    #[serde(default = "default_next_label")]
    pub next: String,
}

impl Default for StoryLabels {
    fn default() -> Self {
        StoryLabels {
            contents: default_contents_label(),
            chapter: default_chapter_label(),
            poetry: String::new(),
            previous: default_previous_label(),
            home: default_home_label(),
            next: default_next_label(),
        }
    }
}

/// A whole book as supplied by the content file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoryContent {
    #[serde(default)]
    pub cover: CoverText,
    #[serde(default)]
    pub labels: StoryLabels,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl ContentProvider for StoryContent {
    fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }
}

/// Load and validate a story file from disk.
pub fn load_story(path: &Path) -> Result<StoryContent> {
    info!(path = %path.display(), "Loading story content");
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read story file {}", path.display()))?;
    let story = parse_story(&data)
        .with_context(|| format!("Invalid story file {}", path.display()))?;
    info!(
        chapters = story.chapters.len(),
        "Finished loading story content"
    );
    Ok(story)
}

/// Parse, normalize and validate a story document.
pub fn parse_story(data: &str) -> Result<StoryContent> {
    let mut story: StoryContent =
        serde_json::from_str(data).context("Story JSON could not be parsed")?;
    normalize_story(&mut story);
    validate_chapters(&story.chapters)?;
    debug!(chapters = story.chapters.len(), "Parsed story document");
    Ok(story)
}

fn validate_chapters(chapters: &[Chapter]) -> Result<()> {
    let mut seen = HashSet::with_capacity(chapters.len());
    for (index, chapter) in chapters.iter().enumerate() {
        if chapter.id == 0 {
            bail!("chapter at position {index} has id 0; ids start at 1");
        }
        if !seen.insert(chapter.id) {
            bail!("duplicate chapter id {}", chapter.id);
        }
    }
    Ok(())
}

fn normalize_story(story: &mut StoryContent) {
    for line in &mut story.cover.title {
        normalize_text(line);
    }
    normalize_text(&mut story.cover.subtitle);
    normalize_text(&mut story.cover.open_hint);
    normalize_text(&mut story.cover.click_hint);
    normalize_text(&mut story.cover.credit);

    let labels = &mut story.labels;
    for label in [
        &mut labels.contents,
        &mut labels.chapter,
        &mut labels.poetry,
        &mut labels.previous,
        &mut labels.home,
        &mut labels.next,
    ] {
        normalize_text(label);
    }

    for chapter in &mut story.chapters {
        if let Some(display_id) = chapter.display_id.as_mut() {
            normalize_text(display_id);
        }
        normalize_text(&mut chapter.title);
        normalize_text(&mut chapter.text);
        normalize_text(&mut chapter.shayari);
    }
}

fn normalize_text(value: &mut String) {
    let unified = value.replace("\r\n", "\n").replace('\r', "\n");
    *value = unified.nfc().collect();
}

fn default_cover_title() -> Vec<String> {
    vec!["Untitled".to_string()]
}

fn default_open_hint() -> String {
    "Open".to_string()
}

fn default_click_hint() -> String {
    "Click here".to_string()
}

fn default_contents_label() -> String {
    "Contents".to_string()
}

fn default_chapter_label() -> String {
    "Chapter".to_string()
}

fn default_previous_label() -> String {
    "Previous page".to_string()
}

fn default_home_label() -> String {
    "Home".to_string()
}

fn default_next_label() -> String {
    "Next page".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter::ImageCorner;

    const SAMPLE: &str = r#"{
        "cover": { "title": ["First", "Second"], "credit": "by someone" },
        "chapters": [
            { "id": 1, "title": "One", "text": "alpha", "shayari": "a\r\nb" },
            { "id": 2, "display_id": "II", "title": "Two", "text": "beta",
              "shayari": "c", "image_corner": "bottom-left" }
        ]
    }"#;

    #[test]
    fn parses_story_with_defaults() {
        let story = parse_story(SAMPLE).expect("story");
        assert_eq!(story.chapter_count(), 2);
        assert_eq!(story.cover.title, vec!["First", "Second"]);
        assert_eq!(story.cover.open_hint, "Open");
        assert_eq!(story.labels.contents, "Contents");
        assert_eq!(story.chapters[0].image_corner, ImageCorner::TopRight);
        assert_eq!(story.chapters[1].image_corner, ImageCorner::BottomLeft);
        assert_eq!(story.chapters[1].display_label(), "II");
    }

    #[test]
    fn normalizes_line_endings_and_composition() {
        let story = parse_story(SAMPLE).expect("story");
        assert_eq!(story.chapters[0].shayari, "a\nb");

        let decomposed = r#"{ "chapters": [
            { "id": 1, "title": "Cafe\u0301", "text": "" }
        ] }"#;
        let story = parse_story(decomposed).expect("story");
        assert_eq!(story.chapters[0].title, "Caf\u{e9}");
    }

    #[test]
    fn rejects_zero_and_duplicate_ids() {
        let zero = r#"{ "chapters": [ { "id": 0, "title": "x", "text": "" } ] }"#;
        assert!(parse_story(zero).is_err());

        let duplicate = r#"{ "chapters": [
            { "id": 3, "title": "x", "text": "" },
            { "id": 3, "title": "y", "text": "" }
        ] }"#;
        let err = parse_story(duplicate).expect_err("duplicate ids");
        assert!(err.to_string().contains("duplicate chapter id 3"));
    }

    #[test]
    fn empty_story_is_valid() {
        let story = parse_story("{}").expect("story");
        assert_eq!(story.chapter_count(), 0);
        assert!(story.chapter(0).is_none());
    }

    #[test]
    fn load_story_reports_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "storybook-missing-{}-story.json",
            std::process::id()
        ));
        let err = load_story(&path).expect_err("missing file");
        assert!(format!("{err:#}").contains("Failed to read story file"));
    }

    #[test]
    fn load_story_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "storybook-load-{}-story.json",
            std::process::id()
        ));
        fs::write(&path, SAMPLE).expect("write sample");
        let story = load_story(&path).expect("story");
        let _ = fs::remove_file(&path);
        assert_eq!(story.chapters[1].title, "Two");
    }
}
