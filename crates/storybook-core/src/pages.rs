//! Derived page sequence.
//!
//! The book is the contents page followed by a narrative page and a poetry
//! page per chapter. Pages have no identity beyond their index; everything
//! here is recomputed from the chapter count on demand.

use crate::chapter::Chapter;
use crate::content::ContentProvider;

/// Index of the table of contents.
pub const CONTENTS_PAGE: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    TableOfContents,
    Narrative,
    Poetry,
}

impl PageKind {
    pub fn tag(self) -> &'static str {
        match self {
            PageKind::TableOfContents => "toc",
            PageKind::Narrative => "narrative",
            PageKind::Poetry => "poetry",
        }
    }
}

/// Position of one page in the derived sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlot {
    pub index: usize,
    pub kind: PageKind,
    pub chapter_index: Option<usize>,
}

/// Everything the renderer needs to draw one page.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub slot: PageSlot,
    pub chapter: Option<&'a Chapter>,
    pub display_index: usize,
    pub total_pages: usize,
}

impl PageView<'_> {
    pub fn kind(&self) -> PageKind {
        self.slot.kind
    }
}

pub fn total_pages(chapter_count: usize) -> usize {
    chapter_count.saturating_mul(2).saturating_add(1)
}

/// First page of a chapter (its narrative page).
pub fn narrative_page_for(chapter_index: usize) -> usize {
    chapter_index.saturating_mul(2).saturating_add(1)
}

pub fn chapter_for_page(index: usize) -> Option<usize> {
    if index == CONTENTS_PAGE {
        None
    } else {
        Some((index - 1) / 2)
    }
}

pub fn page_slot(index: usize, chapter_count: usize) -> Option<PageSlot> {
    if index >= total_pages(chapter_count) {
        return None;
    }
    let kind = if index == CONTENTS_PAGE {
        PageKind::TableOfContents
    } else if index % 2 == 1 {
        PageKind::Narrative
    } else {
        PageKind::Poetry
    };
    Some(PageSlot {
        index,
        kind,
        chapter_index: chapter_for_page(index),
    })
}

pub fn page_sequence(chapter_count: usize) -> impl Iterator<Item = PageSlot> {
    (0..total_pages(chapter_count)).filter_map(move |index| page_slot(index, chapter_count))
}

/// Resolve the page at `index` against the chapters of `content`.
pub fn page_view<P>(content: &P, index: usize) -> Option<PageView<'_>>
where
    P: ContentProvider + ?Sized,
{
    let chapter_count = content.chapter_count();
    let slot = page_slot(index, chapter_count)?;
    let chapter = match slot.chapter_index {
        Some(chapter_index) => Some(content.chapter(chapter_index)?),
        None => None,
    };
    Some(PageView {
        slot,
        chapter,
        display_index: index,
        total_pages: total_pages(chapter_count),
    })
}

pub fn page_views<P>(content: &P) -> Vec<PageView<'_>>
where
    P: ContentProvider + ?Sized,
{
    (0..total_pages(content.chapter_count()))
        .filter_map(|index| page_view(content, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter::ImageCorner;

    fn chapters(count: u32) -> Vec<Chapter> {
        (1..=count)
            .map(|id| Chapter {
                id,
                display_id: None,
                title: format!("Chapter {id}"),
                text: String::new(),
                shayari: String::new(),
                image_corner: ImageCorner::default(),
            })
            .collect()
    }

    #[test]
    fn total_is_two_per_chapter_plus_contents() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(3), 7);
    }

    #[test]
    fn sequence_alternates_narrative_and_poetry() {
        let kinds: Vec<_> = page_sequence(2).map(|slot| slot.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PageKind::TableOfContents,
                PageKind::Narrative,
                PageKind::Poetry,
                PageKind::Narrative,
                PageKind::Poetry,
            ]
        );
        let owners: Vec<_> = page_sequence(2).map(|slot| slot.chapter_index).collect();
        assert_eq!(owners, vec![None, Some(0), Some(0), Some(1), Some(1)]);
    }

    #[test]
    fn narrative_page_round_trips_chapter() {
        for chapter_index in 0..10 {
            let page = narrative_page_for(chapter_index);
            assert_eq!(chapter_for_page(page), Some(chapter_index));
            assert_eq!(chapter_for_page(page + 1), Some(chapter_index));
        }
    }

    #[test]
    fn page_views_attach_chapters() {
        let book = chapters(2);
        let views = page_views(&book);
        assert_eq!(views.len(), 5);
        assert!(views[0].chapter.is_none());
        assert_eq!(views[0].kind().tag(), "toc");
        assert_eq!(views[3].chapter.map(|c| c.id), Some(2));
        assert_eq!(views[4].kind(), PageKind::Poetry);
        assert!(views.iter().all(|view| view.total_pages == 5));
        assert!(page_view(&book, 5).is_none());
    }
}
