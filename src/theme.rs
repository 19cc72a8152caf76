//! Book palette for day and night reading.

use crate::config::ThemeMode;
use iced::Color;
use iced::Theme as IcedTheme;
use iced::theme::Palette;

/// Colors used to paint the book itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookPalette {
    pub backdrop: Color,
    pub paper: Color,
    pub ink: Color,
    pub muted_ink: Color,
    pub cover: Color,
    pub cover_ink: Color,
    pub gold: Color,
    pub spine: Color,
    pub leaf: Color,
}

const DAY: BookPalette = BookPalette {
    backdrop: Color::from_rgb(0.93, 0.90, 0.85),
    paper: Color::from_rgb(0.98, 0.96, 0.91),
    ink: Color::from_rgb(0.20, 0.16, 0.13),
    muted_ink: Color::from_rgb(0.47, 0.42, 0.37),
    cover: Color::from_rgb(0.36, 0.14, 0.12),
    cover_ink: Color::from_rgb(0.99, 0.95, 0.86),
    gold: Color::from_rgb(0.80, 0.63, 0.29),
    spine: Color::from_rgb(0.27, 0.10, 0.09),
    leaf: Color::from_rgba(0.95, 0.92, 0.85, 0.92),
};

const NIGHT: BookPalette = BookPalette {
    backdrop: Color::from_rgb(0.08, 0.08, 0.10),
    paper: Color::from_rgb(0.17, 0.16, 0.15),
    ink: Color::from_rgb(0.88, 0.85, 0.80),
    muted_ink: Color::from_rgb(0.62, 0.58, 0.53),
    cover: Color::from_rgb(0.24, 0.09, 0.08),
    cover_ink: Color::from_rgb(0.95, 0.90, 0.80),
    gold: Color::from_rgb(0.72, 0.56, 0.26),
    spine: Color::from_rgb(0.15, 0.05, 0.05),
    leaf: Color::from_rgba(0.25, 0.24, 0.22, 0.92),
};

impl BookPalette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Day => DAY,
            ThemeMode::Night => NIGHT,
        }
    }
}

impl From<ThemeMode> for IcedTheme {
    fn from(mode: ThemeMode) -> Self {
        let book = BookPalette::for_mode(mode);
        IcedTheme::custom(
            format!("Storybook {mode}"),
            Palette {
                background: book.backdrop,
                text: book.ink,
                primary: book.gold,
                success: Color::from_rgb(0.30, 0.55, 0.35),
                danger: Color::from_rgb(0.70, 0.22, 0.20),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_paper_is_darker_than_day_paper() {
        let day = BookPalette::for_mode(ThemeMode::Day).paper;
        let night = BookPalette::for_mode(ThemeMode::Night).paper;
        assert!(night.r < day.r && night.g < day.g && night.b < day.b);
    }

    #[test]
    fn iced_theme_uses_book_backdrop() {
        let theme = IcedTheme::from(ThemeMode::Night);
        assert_eq!(
            theme.palette().background,
            BookPalette::for_mode(ThemeMode::Night).backdrop
        );
    }
}
