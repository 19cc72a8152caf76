//! Illustration lookup.
//!
//! Images are found by naming convention relative to an assets directory:
//! - narrative art: `images/{99 + id}.png`
//! - poetry art: `images/{id}.png`
//! - cover: `coverp.jpg`
//!
//! A missing or undecodable image is simply absent from the catalog; pages
//! render without it.

use crate::chapter::Chapter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const NARRATIVE_IMAGE_OFFSET: u32 = 99;
pub const IMAGES_DIR: &str = "images";
pub const COVER_IMAGE: &str = "coverp.jpg";

#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn narrative_image(&self, chapter: &Chapter) -> PathBuf {
        let number = chapter.id.saturating_add(NARRATIVE_IMAGE_OFFSET);
        self.root.join(IMAGES_DIR).join(format!("{number}.png"))
    }

    pub fn poetry_image(&self, chapter: &Chapter) -> PathBuf {
        self.root
            .join(IMAGES_DIR)
            .join(format!("{}.png", chapter.id))
    }

    pub fn cover_image(&self) -> PathBuf {
        self.root.join(COVER_IMAGE)
    }
}

/// Images that exist and decode, keyed by chapter id.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    narrative: HashMap<u32, PathBuf>,
    poetry: HashMap<u32, PathBuf>,
    cover: Option<PathBuf>,
}

impl AssetCatalog {
    pub fn scan(resolver: &AssetResolver, chapters: &[Chapter]) -> Self {
        let mut catalog = AssetCatalog {
            cover: probe(&resolver.cover_image()),
            ..AssetCatalog::default()
        };
        for chapter in chapters {
            if let Some(path) = probe(&resolver.narrative_image(chapter)) {
                catalog.narrative.insert(chapter.id, path);
            }
            if let Some(path) = probe(&resolver.poetry_image(chapter)) {
                catalog.poetry.insert(chapter.id, path);
            }
        }
        debug!(
            root = %resolver.root().display(),
            narrative = catalog.narrative.len(),
            poetry = catalog.poetry.len(),
            cover = catalog.cover.is_some(),
            "Scanned story illustrations"
        );
        catalog
    }

    pub fn narrative(&self, chapter_id: u32) -> Option<&Path> {
        self.narrative.get(&chapter_id).map(PathBuf::as_path)
    }

    pub fn poetry(&self, chapter_id: u32) -> Option<&Path> {
        self.poetry.get(&chapter_id).map(PathBuf::as_path)
    }

    pub fn cover(&self) -> Option<&Path> {
        self.cover.as_deref()
    }
}

fn probe(path: &Path) -> Option<PathBuf> {
    if !path.is_file() {
        debug!(path = %path.display(), "Illustration not found; page renders without it");
        return None;
    }
    match image::image_dimensions(path) {
        Ok((width, height)) if width > 0 && height > 0 => Some(path.to_path_buf()),
        Ok(_) => {
            warn!(path = %path.display(), "Illustration has no pixels; hiding it");
            None
        }
        Err(err) => {
            warn!(path = %path.display(), "Illustration could not be decoded; hiding it: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter::ImageCorner;
    use std::fs;

    fn chapter(id: u32) -> Chapter {
        Chapter {
            id,
            display_id: None,
            title: String::new(),
            text: String::new(),
            shayari: String::new(),
            image_corner: ImageCorner::TopLeft,
        }
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "storybook-assets-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join(IMAGES_DIR)).expect("create scratch dir");
        dir
    }

    #[test]
    fn paths_follow_naming_convention() {
        let resolver = AssetResolver::new("/srv/book");
        assert_eq!(
            resolver.narrative_image(&chapter(1)),
            PathBuf::from("/srv/book/images/100.png")
        );
        assert_eq!(
            resolver.poetry_image(&chapter(12)),
            PathBuf::from("/srv/book/images/12.png")
        );
        assert_eq!(resolver.cover_image(), PathBuf::from("/srv/book/coverp.jpg"));
    }

    #[test]
    fn catalog_keeps_only_decodable_images() {
        let dir = scratch_dir("scan");
        let resolver = AssetResolver::new(&dir);
        image::RgbImage::new(2, 2)
            .save(resolver.narrative_image(&chapter(1)))
            .expect("write png");
        fs::write(resolver.poetry_image(&chapter(1)), b"not an image").expect("write junk");

        let catalog = AssetCatalog::scan(&resolver, &[chapter(1), chapter(2)]);
        let _ = fs::remove_dir_all(&dir);

        assert!(catalog.narrative(1).is_some());
        assert!(catalog.poetry(1).is_none());
        assert!(catalog.narrative(2).is_none());
        assert!(catalog.poetry(2).is_none());
        assert!(catalog.cover().is_none());
    }
}
