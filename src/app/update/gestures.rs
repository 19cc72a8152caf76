use super::super::state::App;
use super::Effect;
use iced::Point;
use iced::touch::Finger;
use storybook_core::{SwipeDirection, Tilt, TouchPoint};
use tracing::{debug, trace};

fn touch_point(position: Point) -> TouchPoint {
    TouchPoint::new(position.x, position.y)
}

impl App {
    pub(super) fn handle_touch_pressed(&mut self, finger: Finger, position: Point) {
        if self.active_finger.is_some() {
            trace!(?finger, "Ignoring additional finger");
            return;
        }
        self.active_finger = Some(finger);
        let region = self.active_scroll_region();
        self.swipe
            .touch_start(touch_point(position), &self.navigator, &region);
    }

    pub(super) fn handle_touch_moved(&mut self, finger: Finger, position: Point) {
        if self.active_finger != Some(finger) {
            return;
        }
        let region = self.active_scroll_region();
        self.swipe
            .touch_move(touch_point(position), &self.navigator, &region);
    }

    pub(super) fn handle_touch_lifted(
        &mut self,
        finger: Finger,
        _position: Point,
        effects: &mut Vec<Effect>,
    ) {
        if self.active_finger != Some(finger) {
            return;
        }
        self.active_finger = None;
        match self.swipe.touch_end(&self.navigator) {
            Some(SwipeDirection::Next) => {
                debug!("Swipe left; turning forward");
                self.handle_next_page(effects);
            }
            Some(SwipeDirection::Previous) => {
                debug!("Swipe right; turning back");
                self.handle_previous_page(effects);
            }
            None => {}
        }
    }

    pub(super) fn handle_touch_lost(&mut self, finger: Finger) {
        if self.active_finger != Some(finger) {
            return;
        }
        self.active_finger = None;
        self.swipe.cancel();
    }

    /// `position` is relative to the cover's bounds.
    pub(super) fn handle_cover_pointer_moved(&mut self, position: Point) {
        if self.navigator.is_open() {
            return;
        }
        self.tilt = Tilt::from_pointer(
            position.x,
            position.y,
            self.layout.book_width(),
            self.layout.book_height(),
            self.config.tilt_max_degrees,
        );
    }

    pub(super) fn handle_cover_pointer_left(&mut self) {
        self.tilt = Tilt::NEUTRAL;
    }
}
