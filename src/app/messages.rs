use iced::Point;
use iced::keyboard::{Key, Modifiers};
use iced::touch::Finger;
use std::time::Instant;
use storybook_core::SettleTicket;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    OpenBook,
    NextPage,
    PreviousPage,
    GoHome,
    SelectChapter(usize),
    TransitionSettled(SettleTicket),
    Tick(Instant),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    TouchPressed {
        finger: Finger,
        position: Point,
    },
    TouchMoved {
        finger: Finger,
        position: Point,
    },
    TouchLifted {
        finger: Finger,
        position: Point,
    },
    TouchLost {
        finger: Finger,
    },
    CoverPointerMoved(Point),
    CoverPointerLeft,
    WindowResized {
        width: f32,
        height: f32,
    },
}
