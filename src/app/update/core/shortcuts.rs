use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Keyboard navigation only applies while the book is open.
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        if !self.navigator.is_open() {
            return None;
        }
        let pressed = Self::pressed_token(&key)?;

        if Self::shortcut_matches(&self.config.key_next_page, "arrowright", &pressed, modifiers) {
            Some(Message::NextPage)
        } else if Self::shortcut_matches(
            &self.config.key_previous_page,
            "arrowleft",
            &pressed,
            modifiers,
        ) {
            Some(Message::PreviousPage)
        } else if Self::shortcut_matches(&self.config.key_go_home, "escape", &pressed, modifiers) {
            Some(Message::GoHome)
        } else {
            None
        }
    }

    fn pressed_token(key: &Key) -> Option<String> {
        let token = match key.as_ref() {
            Key::Named(key::Named::ArrowRight) => "arrowright",
            Key::Named(key::Named::ArrowLeft) => "arrowleft",
            Key::Named(key::Named::ArrowUp) => "arrowup",
            Key::Named(key::Named::ArrowDown) => "arrowdown",
            Key::Named(key::Named::Escape) => "escape",
            Key::Named(key::Named::Space) => "space",
            Key::Named(key::Named::Enter) => "enter",
            Key::Named(key::Named::Home) => "home",
            Key::Named(key::Named::End) => "end",
            Key::Named(key::Named::PageUp) => "pageup",
            Key::Named(key::Named::PageDown) => "pagedown",
            Key::Named(key::Named::Backspace) => "backspace",
            Key::Character(ch) => return Some(ch.to_ascii_lowercase()),
            _ => return None,
        };
        Some(token.to_string())
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return fallback.to_string();
        }
        normalized
            .split('+')
            .map(|token| match token.trim() {
                "spacebar" => "space",
                "right" | "arrow_right" => "arrowright",
                "left" | "arrow_left" => "arrowleft",
                "esc" => "escape",
                other => other,
            })
            .collect::<Vec<_>>()
            .join("+")
    }
}
