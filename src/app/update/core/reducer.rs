use super::super::super::messages::Message;
use super::super::super::state::{App, BookLayout};
use super::super::Effect;
use tracing::debug;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::OpenBook => self.handle_open_book(),
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::GoHome => self.handle_go_home(&mut effects),
            Message::SelectChapter(index) => self.handle_select_chapter(index, &mut effects),
            Message::TransitionSettled(ticket) => self.handle_transition_settled(ticket),
            Message::Tick(now) => self.handle_tick(now),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::TouchPressed { finger, position } => {
                self.handle_touch_pressed(finger, position);
            }
            Message::TouchMoved { finger, position } => {
                self.handle_touch_moved(finger, position);
            }
            Message::TouchLifted { finger, position } => {
                self.handle_touch_lifted(finger, position, &mut effects);
            }
            Message::TouchLost { finger } => self.handle_touch_lost(finger),
            Message::CoverPointerMoved(position) => self.handle_cover_pointer_moved(position),
            Message::CoverPointerLeft => self.handle_cover_pointer_left(),
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
        }

        effects
    }

    fn handle_window_resized(&mut self, width: f32, height: f32) {
        self.config.window_width = width;
        self.config.window_height = height;
        self.layout = BookLayout::compute(width, height, self.config.max_book_width);
        debug!(
            width,
            height,
            book_width = self.layout.book_width(),
            book_height = self.layout.book_height(),
            "Window resized; recomputed book layout"
        );
    }
}
