use super::messages::Message;
use super::state::{
    App, BODY_SIZE_PX, CONTROL_SPACING_PX, CORNER_IMAGE_SIZE_PX, COVER_HINT_SIZE_PX,
    COVER_SUBTITLE_SIZE_PX, COVER_TITLE_SIZE_PX, HEADING_SIZE_PX, LABEL_SIZE_PX,
    NARRATIVE_IMAGE_HEIGHT_PX, PAGE_FOOTER_HEIGHT_PX, PAGE_NUMBER_SIZE_PX, PAGE_PADDING_PX,
    POETRY_SIZE_PX, SPINE_WIDTH_PX, leaf_geometry,
};
use crate::theme::BookPalette;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::LineHeight;
use iced::widget::{
    Column, Space, Stack, button, column, container, image, mouse_area, row, scrollable, text,
};
use iced::{Background, Border, Color, ContentFit, Element, Length, Padding, Radians, Rotation};
use storybook_core::{
    Chapter, ContentProvider, ImageCorner, NumeralSystem, PageKind, PageView, page_view,
};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = BookPalette::for_mode(self.config.theme);
        let book = self.layout.book;

        let face: Element<'_, Message> = if self.navigator.is_open() {
            self.open_book_view(palette)
        } else {
            self.cover_view(palette)
        };

        let mut layers = Stack::new()
            .width(Length::Fixed(book.width))
            .height(Length::Fixed(book.height))
            .push(face);
        if let Some(leaf) = self.page_turn_overlay(palette) {
            layers = layers.push(leaf);
        }

        // Positioned at exactly the rectangle the touch hit test assumes.
        let placed = container(layers).padding(Padding {
            top: book.y,
            right: 0.0,
            bottom: 0.0,
            left: book.x,
        });

        let mut content = Column::new().spacing(CONTROL_SPACING_PX).push(placed);
        if self.navigator.is_open() {
            content = content.push(self.controls_view());
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(palette.backdrop)),
                ..container::Style::default()
            })
            .into()
    }

    fn cover_view(&self, palette: BookPalette) -> Element<'_, Message> {
        let cover = &self.story.cover;
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if let Some(path) = self.assets.cover() {
            layers = layers.push(
                image(image::Handle::from_path(path))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .rotation(Rotation::Floating(Radians(self.tilt.y_radians()))),
            );
        }

        let title = Column::with_children(cover.title.iter().map(|line| {
            text(line.as_str())
                .size(COVER_TITLE_SIZE_PX)
                .color(palette.cover_ink)
                .align_x(Horizontal::Center)
                .into()
        }))
        .spacing(4)
        .align_x(Horizontal::Center);

        let mut lettering = column![title].spacing(18).align_x(Horizontal::Center);
        if !cover.subtitle.is_empty() {
            lettering = lettering.push(
                text(cover.subtitle.as_str())
                    .size(COVER_SUBTITLE_SIZE_PX)
                    .color(palette.gold),
            );
        }
        lettering = lettering
            .push(Space::with_height(Length::Fixed(24.0)))
            .push(
                text(cover.open_hint.as_str())
                    .size(COVER_HINT_SIZE_PX)
                    .color(palette.cover_ink),
            )
            .push(
                text(cover.click_hint.as_str())
                    .size(COVER_HINT_SIZE_PX)
                    .color(palette.gold),
            );
        if !cover.credit.is_empty() {
            lettering = lettering.push(
                text(cover.credit.as_str())
                    .size(LABEL_SIZE_PX)
                    .color(palette.cover_ink),
            );
        }

        layers = layers.push(
            container(lettering)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(PAGE_PADDING_PX)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

        let surface = container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(palette.cover)),
                border: Border {
                    color: palette.gold,
                    width: 2.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            });

        mouse_area(surface)
            .on_press(Message::OpenBook)
            .on_move(Message::CoverPointerMoved)
            .on_exit(Message::CoverPointerLeft)
            .into()
    }

    fn open_book_view(&self, palette: BookPalette) -> Element<'_, Message> {
        let Some(view) = page_view(&self.story, self.navigator.current_page()) else {
            return Space::new(Length::Fill, Length::Fill).into();
        };

        let (body, corner): (Element<'_, Message>, Option<Element<'_, Message>>) =
            match (view.kind(), view.chapter) {
                (PageKind::Narrative, Some(chapter)) => {
                    (self.narrative_body(chapter, palette), None)
                }
                (PageKind::Poetry, Some(chapter)) => (
                    self.poetry_body(chapter, palette),
                    self.corner_illustration(chapter),
                ),
                _ => (self.contents_body(palette), None),
            };

        let page = column![
            container(body).width(Length::Fill).height(Length::Fill),
            self.page_footer(&view, palette)
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
        if let Some(corner) = corner {
            layers = layers.push(corner);
        }
        layers = layers
            .push(container(page).padding(PAGE_PADDING_PX))
            .push(
                container(Space::new(Length::Fixed(SPINE_WIDTH_PX), Length::Fill)).style(
                    move |_theme| container::Style {
                        background: Some(Background::Color(palette.spine)),
                        ..container::Style::default()
                    },
                ),
            );

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(palette.paper)),
                text_color: Some(palette.ink),
                border: Border {
                    color: palette.spine,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..container::Style::default()
            })
            .into()
    }

    fn contents_body(&self, palette: BookPalette) -> Element<'_, Message> {
        let entries = self
            .story
            .chapters()
            .iter()
            .enumerate()
            .map(|(index, chapter)| {
                let label = row![
                    text(chapter.display_label())
                        .size(BODY_SIZE_PX)
                        .color(palette.gold)
                        .width(Length::Fixed(48.0)),
                    text(chapter.title.as_str())
                        .size(BODY_SIZE_PX)
                        .color(palette.ink)
                ]
                .spacing(12)
                .align_y(Vertical::Center);
                button(label)
                    .width(Length::Fill)
                    .style(button::text)
                    .on_press(Message::SelectChapter(index))
                    .into()
            });

        let list = Column::with_children(entries).spacing(6).width(Length::Fill);

        column![
            text(self.story.labels.contents.as_str())
                .size(HEADING_SIZE_PX)
                .color(palette.ink)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            scrollable(list).width(Length::Fill).height(Length::Fill)
        ]
        .spacing(18)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn narrative_body<'a>(
        &'a self,
        chapter: &'a Chapter,
        palette: BookPalette,
    ) -> Element<'a, Message> {
        let labels = &self.story.labels;
        let mut flow = column![
            text(format!("{} {}", labels.chapter, chapter.display_label()))
                .size(LABEL_SIZE_PX)
                .color(palette.muted_ink),
            text(chapter.title.as_str())
                .size(HEADING_SIZE_PX)
                .color(palette.ink)
        ]
        .spacing(8)
        .width(Length::Fill);

        if let Some(path) = self.assets.narrative(chapter.id) {
            flow = flow.push(
                image(image::Handle::from_path(path))
                    .width(Length::Fill)
                    .height(Length::Fixed(NARRATIVE_IMAGE_HEIGHT_PX))
                    .content_fit(ContentFit::Cover),
            );
        }

        flow = flow.push(
            text(chapter.text.as_str())
                .size(BODY_SIZE_PX)
                .line_height(LineHeight::Relative(1.6))
                .color(palette.ink),
        );

        scrollable(flow.spacing(16).padding(Padding {
            top: 0.0,
            right: 12.0,
            bottom: 0.0,
            left: 0.0,
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn poetry_body<'a>(
        &'a self,
        chapter: &'a Chapter,
        palette: BookPalette,
    ) -> Element<'a, Message> {
        let mut verse = Column::new().spacing(6).align_x(Horizontal::Center);
        let heading = &self.story.labels.poetry;
        if !heading.is_empty() {
            verse = verse.push(
                text(format!("✦ {heading} ✦"))
                    .size(LABEL_SIZE_PX)
                    .color(palette.muted_ink),
            );
            verse = verse.push(Space::with_height(Length::Fixed(12.0)));
        }
        for line in chapter.shayari_lines() {
            verse = verse.push(
                text(line)
                    .size(POETRY_SIZE_PX)
                    .line_height(LineHeight::Relative(1.5))
                    .color(palette.ink)
                    .align_x(Horizontal::Center),
            );
        }

        container(scrollable(container(verse).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .into()
    }

    fn corner_illustration(&self, chapter: &Chapter) -> Option<Element<'_, Message>> {
        let path = self.assets.poetry(chapter.id)?;
        let art = image(image::Handle::from_path(path))
            .width(Length::Fixed(CORNER_IMAGE_SIZE_PX))
            .height(Length::Fixed(CORNER_IMAGE_SIZE_PX))
            .content_fit(ContentFit::Cover);
        Some(
            container(art)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(corner_horizontal(chapter.image_corner))
                .align_y(corner_vertical(chapter.image_corner))
                .into(),
        )
    }

    fn page_footer(&self, view: &PageView<'_>, palette: BookPalette) -> Element<'_, Message> {
        if !shows_page_number(view.kind()) {
            return Space::new(Length::Fill, Length::Fixed(PAGE_FOOTER_HEIGHT_PX)).into();
        }
        container(
            text(self.config.numerals.format(view.display_index))
                .size(PAGE_NUMBER_SIZE_PX)
                .color(palette.muted_ink),
        )
        .width(Length::Fill)
        .height(Length::Fixed(PAGE_FOOTER_HEIGHT_PX))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
    }

    fn controls_view(&self) -> Element<'_, Message> {
        let labels = &self.story.labels;
        let numerals = self.config.numerals;
        let indicator = page_indicator(
            numerals,
            self.navigator.current_page(),
            self.navigator.total_pages(),
        );

        let controls = row![
            button(text(labels.previous.as_str()))
                .on_press_maybe(self.navigator.can_go_prev().then_some(Message::PreviousPage)),
            button(text(labels.home.as_str()))
                .style(button::secondary)
                .on_press_maybe((!self.navigator.is_animating()).then_some(Message::GoHome)),
            button(text(labels.next.as_str()))
                .on_press_maybe(self.navigator.can_go_next().then_some(Message::NextPage)),
            text(indicator).size(PAGE_NUMBER_SIZE_PX)
        ]
        .spacing(CONTROL_SPACING_PX)
        .align_y(Vertical::Center);

        container(controls).center_x(Length::Fill).into()
    }

    fn page_turn_overlay(&self, palette: BookPalette) -> Option<Element<'_, Message>> {
        let turn = self.turn?;
        let geometry = leaf_geometry(
            turn.progress,
            turn.transition.is_forward(),
            self.layout.book_width(),
        );
        if geometry.width <= 0.0 {
            return None;
        }
        let leaf = container(Space::new(Length::Fixed(geometry.width), Length::Fill)).style(
            move |_theme| container::Style {
                background: Some(Background::Color(palette.leaf)),
                border: Border {
                    color: Color {
                        a: 0.35,
                        ..palette.spine
                    },
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..container::Style::default()
            },
        );
        Some(
            row![Space::with_width(Length::Fixed(geometry.offset)), leaf]
                .height(Length::Fill)
                .into(),
        )
    }
}

/// The contents page is unnumbered; chapter pages count from 1.
fn shows_page_number(kind: PageKind) -> bool {
    kind != PageKind::TableOfContents
}

fn page_indicator(numerals: NumeralSystem, current_page: usize, total_pages: usize) -> String {
    format!(
        "{} / {}",
        numerals.format(current_page),
        numerals.format(total_pages.saturating_sub(1))
    )
}

fn corner_horizontal(corner: ImageCorner) -> Horizontal {
    if corner.is_left() {
        Horizontal::Left
    } else {
        Horizontal::Right
    }
}

fn corner_vertical(corner: ImageCorner) -> Vertical {
    if corner.is_top() {
        Vertical::Top
    } else {
        Vertical::Bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_alignment_follows_image_corner() {
        assert_eq!(corner_horizontal(ImageCorner::TopLeft), Horizontal::Left);
        assert_eq!(corner_vertical(ImageCorner::TopLeft), Vertical::Top);
        assert_eq!(corner_horizontal(ImageCorner::BottomRight), Horizontal::Right);
        assert_eq!(corner_vertical(ImageCorner::BottomRight), Vertical::Bottom);
    }

    #[test]
    fn indicator_matches_footer_numbering() {
        assert_eq!(page_indicator(NumeralSystem::Western, 1, 7), "1 / 6");
        assert_eq!(page_indicator(NumeralSystem::Western, 6, 7), "6 / 6");
        assert_eq!(page_indicator(NumeralSystem::Odia, 2, 7), "୨ / ୬");
        assert_eq!(page_indicator(NumeralSystem::Western, 0, 0), "0 / 0");
    }

    #[test]
    fn contents_page_has_no_page_number() {
        assert!(!shows_page_number(PageKind::TableOfContents));
        assert!(shows_page_number(PageKind::Narrative));
        assert!(shows_page_number(PageKind::Poetry));
    }
}
