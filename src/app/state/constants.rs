use std::time::Duration;

/// Geometry of the book on screen.
pub(crate) const BOOK_MARGIN_PX: f32 = 24.0;
pub(crate) const BOOK_ASPECT: f32 = 3.0 / 4.0;
pub(crate) const MAX_BOOK_HEIGHT_FRACTION: f32 = 0.85;
pub(crate) const PAGE_PADDING_PX: f32 = 28.0;
pub(crate) const PAGE_FOOTER_HEIGHT_PX: f32 = 40.0;
pub(crate) const SPINE_WIDTH_PX: f32 = 6.0;

/// Typography and widget sizes.
pub(crate) const COVER_TITLE_SIZE_PX: f32 = 34.0;
pub(crate) const COVER_SUBTITLE_SIZE_PX: f32 = 18.0;
pub(crate) const COVER_HINT_SIZE_PX: f32 = 14.0;
pub(crate) const HEADING_SIZE_PX: f32 = 26.0;
pub(crate) const LABEL_SIZE_PX: f32 = 13.0;
pub(crate) const BODY_SIZE_PX: f32 = 16.0;
pub(crate) const POETRY_SIZE_PX: f32 = 18.0;
pub(crate) const PAGE_NUMBER_SIZE_PX: f32 = 14.0;
pub(crate) const NARRATIVE_IMAGE_HEIGHT_PX: f32 = 220.0;
pub(crate) const CORNER_IMAGE_SIZE_PX: f32 = 120.0;
pub(crate) const CONTROL_SPACING_PX: f32 = 16.0;

/// Page-turn overlay repaint cadence while a transition is in flight.
pub(crate) const TURN_TICK_INTERVAL: Duration = Duration::from_millis(16);
