//! Window-derived book geometry.
//!
//! The view places the book at exactly the rectangle computed here, so the
//! touch hit test and the rendered scrollables agree without querying
//! widget bounds.

use super::constants::{
    BOOK_ASPECT, BOOK_MARGIN_PX, MAX_BOOK_HEIGHT_FRACTION, PAGE_FOOTER_HEIGHT_PX, PAGE_PADDING_PX,
};
use storybook_core::{PageKind, Region};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BookLayout {
    pub(crate) book: Region,
}

impl BookLayout {
    pub(crate) fn compute(window_width: f32, window_height: f32, max_book_width: f32) -> Self {
        let window_width = window_width.max(0.0);
        let window_height = window_height.max(0.0);
        let mut width = (window_width - 2.0 * BOOK_MARGIN_PX)
            .min(max_book_width)
            .max(0.0);
        let mut height = width / BOOK_ASPECT;
        let max_height = window_height * MAX_BOOK_HEIGHT_FRACTION;
        if height > max_height {
            height = max_height;
            width = height * BOOK_ASPECT;
        }
        let x = ((window_width - width) / 2.0).max(0.0);
        BookLayout {
            book: Region::new(x, BOOK_MARGIN_PX, width, height),
        }
    }

    pub(crate) fn book_width(&self) -> f32 {
        self.book.width
    }

    pub(crate) fn book_height(&self) -> f32 {
        self.book.height
    }

    /// Scrollable body of a page: everything inside the page padding above
    /// the footer. Every page kind scrolls its body.
    pub(crate) fn scroll_region(&self, kind: PageKind) -> Option<Region> {
        match kind {
            PageKind::TableOfContents | PageKind::Narrative | PageKind::Poetry => {
                let body = self.book.inset(PAGE_PADDING_PX);
                Some(Region::new(
                    body.x,
                    body.y,
                    body.width,
                    (body.height - PAGE_FOOTER_HEIGHT_PX).max(0.0),
                ))
            }
        }
    }
}

/// Horizontal extent of the turning leaf, relative to the book's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LeafGeometry {
    pub(crate) offset: f32,
    pub(crate) width: f32,
}

/// The leaf widens towards mid-turn and travels right to left when turning
/// forward, left to right when turning back.
pub(crate) fn leaf_geometry(progress: f32, forward: bool, book_width: f32) -> LeafGeometry {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        1.0
    };
    let book_width = book_width.max(0.0);
    let width = book_width * 0.5 * (1.0 - (2.0 * progress - 1.0).abs());
    let center = if forward {
        book_width * (1.0 - progress)
    } else {
        book_width * progress
    };
    let offset = (center - width / 2.0).clamp(0.0, (book_width - width).max(0.0));
    LeafGeometry { offset, width }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storybook_core::TouchPoint;

    #[test]
    fn wide_window_is_capped_by_max_book_width() {
        let layout = BookLayout::compute(2000.0, 2000.0, 800.0);
        assert_eq!(layout.book_width(), 800.0);
        assert!((layout.book_height() - 800.0 / BOOK_ASPECT).abs() < 0.01);
        assert_eq!(layout.book.x, 600.0);
        assert_eq!(layout.book.y, BOOK_MARGIN_PX);
    }

    #[test]
    fn short_window_caps_height_and_keeps_aspect() {
        let layout = BookLayout::compute(1200.0, 600.0, 800.0);
        assert!((layout.book_height() - 510.0).abs() < 0.01);
        assert!((layout.book_width() - 510.0 * BOOK_ASPECT).abs() < 0.01);
    }

    #[test]
    fn tiny_window_collapses_without_negative_sizes() {
        let layout = BookLayout::compute(10.0, 10.0, 800.0);
        assert_eq!(layout.book_width(), 0.0);
        assert_eq!(layout.book_height(), 0.0);
    }

    #[test]
    fn page_bodies_scroll_but_margins_do_not() {
        let layout = BookLayout::compute(1024.0, 1200.0, 600.0);
        let region = layout
            .scroll_region(PageKind::Narrative)
            .expect("narrative scrolls");
        let book = layout.book;
        let center = TouchPoint::new(book.x + book.width / 2.0, book.y + book.height / 2.0);
        assert!(region.contains(center));
        assert!(!region.contains(TouchPoint::new(book.x + 4.0, center.y)));
        let footer = TouchPoint::new(center.x, book.y + book.height - 8.0);
        assert!(!region.contains(footer));
        assert_eq!(
            layout.scroll_region(PageKind::Poetry),
            layout.scroll_region(PageKind::Narrative)
        );
    }

    #[test]
    fn leaf_sweeps_in_turn_direction() {
        let start = leaf_geometry(0.0, true, 400.0);
        let mid = leaf_geometry(0.5, true, 400.0);
        let end = leaf_geometry(1.0, true, 400.0);
        assert_eq!(start.width, 0.0);
        assert_eq!(mid.width, 200.0);
        assert_eq!(mid.offset, 100.0);
        assert_eq!(end.width, 0.0);

        let early_forward = leaf_geometry(0.25, true, 400.0);
        let early_back = leaf_geometry(0.25, false, 400.0);
        assert!(early_forward.offset > early_back.offset);
    }
}
