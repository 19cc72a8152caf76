//! Swipe detection for touch navigation.
//!
//! A touch interaction is classified as a horizontal swipe (next/previous
//! page), a vertical drag (ignored), or one that belongs to a scrollable
//! region of the page (never recorded at all). Touches that start in, or
//! wander into, a scrollable region are handed to native scrolling.

use crate::navigation::BookNavigator;
use tracing::trace;

/// Minimum horizontal travel, in logical pixels, for a swipe to count.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in the same coordinate space as touch points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: TouchPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Shrink by `amount` on every side, never below zero size.
    pub fn inset(&self, amount: f32) -> Self {
        let amount = amount.max(0.0);
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }
}

/// Hit test for areas that own their touches (long text that scrolls).
pub trait ScrollRegions {
    fn contains(&self, point: TouchPoint) -> bool;
}

impl ScrollRegions for [Region] {
    fn contains(&self, point: TouchPoint) -> bool {
        self.iter().any(|region| region.contains(point))
    }
}

impl ScrollRegions for Vec<Region> {
    fn contains(&self, point: TouchPoint) -> bool {
        ScrollRegions::contains(self.as_slice(), point)
    }
}

impl ScrollRegions for Option<Region> {
    fn contains(&self, point: TouchPoint) -> bool {
        self.is_some_and(|region| region.contains(point))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// How a finished touch was read, before page bounds are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeClass {
    Horizontal(SwipeDirection),
    Vertical,
    TooShort,
}

impl SwipeClass {
    /// `start` and `end` are the first and last recorded positions.
    pub fn classify(start: TouchPoint, end: TouchPoint, threshold: f32) -> Self {
        let dx = start.x - end.x;
        let dy = start.y - end.y;
        if dy.abs() > dx.abs() {
            SwipeClass::Vertical
        } else if dx > threshold {
            SwipeClass::Horizontal(SwipeDirection::Next)
        } else if dx < -threshold {
            SwipeClass::Horizontal(SwipeDirection::Previous)
        } else {
            SwipeClass::TooShort
        }
    }
}

/// Positions recorded for the touch currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub touch_start: Option<TouchPoint>,
    pub touch_end: Option<TouchPoint>,
}

impl GestureState {
    pub fn clear(&mut self) {
        *self = GestureState::default();
    }

    pub fn is_tracking(&self) -> bool {
        self.touch_start.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    state: GestureState,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            state: GestureState::default(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn cancel(&mut self) {
        if self.state.is_tracking() {
            trace!("Touch gesture cancelled");
        }
        self.state.clear();
    }

    pub fn touch_start<R>(&mut self, point: TouchPoint, nav: &BookNavigator, regions: &R)
    where
        R: ScrollRegions + ?Sized,
    {
        if !nav.is_open() || nav.is_animating() {
            return;
        }
        if regions.contains(point) {
            trace!(x = point.x, y = point.y, "Touch began in scrollable region");
            return;
        }
        self.state = GestureState {
            touch_start: Some(point),
            touch_end: None,
        };
    }

    pub fn touch_move<R>(&mut self, point: TouchPoint, nav: &BookNavigator, regions: &R)
    where
        R: ScrollRegions + ?Sized,
    {
        if !nav.is_open() || nav.is_animating() || !self.state.is_tracking() {
            return;
        }
        if regions.contains(point) {
            trace!(x = point.x, y = point.y, "Touch moved into scrollable region");
            self.state.clear();
            return;
        }
        self.state.touch_end = Some(point);
    }

    /// Resolve the gesture. The recorded positions are always discarded.
    pub fn touch_end(&mut self, nav: &BookNavigator) -> Option<SwipeDirection> {
        let GestureState {
            touch_start,
            touch_end,
        } = std::mem::take(&mut self.state);
        if !nav.is_open() || nav.is_animating() {
            return None;
        }
        let (start, end) = (touch_start?, touch_end?);

        match SwipeClass::classify(start, end, self.threshold) {
            SwipeClass::Horizontal(SwipeDirection::Next)
                if nav.current_page() < nav.last_page() =>
            {
                Some(SwipeDirection::Next)
            }
            SwipeClass::Horizontal(SwipeDirection::Previous) if nav.current_page() > 0 => {
                Some(SwipeDirection::Previous)
            }
            class => {
                trace!(?class, "Touch ended without navigation");
                None
            }
        }
    }
}
