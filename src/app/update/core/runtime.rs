use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::touch;
use iced::window;
use tracing::trace;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScheduleSettle { ticket, delay } => {
                trace!(
                    ticket = ticket.id(),
                    delay_ms = delay.as_millis() as u64,
                    "Scheduling transition settle"
                );
                Task::perform(tokio::time::sleep(delay), move |_| {
                    Message::TransitionSettled(ticket)
                })
            }
        }
    }
}

/// Touches are observed even when a widget captured them, since scrollables
/// capture every touch over their bounds; the scroll-region hit test decides
/// whether they count as swipes.
pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Touch(touch::Event::FingerPressed { id, position }) => Some(Message::TouchPressed {
            finger: id,
            position,
        }),
        Event::Touch(touch::Event::FingerMoved { id, position }) => Some(Message::TouchMoved {
            finger: id,
            position,
        }),
        Event::Touch(touch::Event::FingerLifted { id, position }) => Some(Message::TouchLifted {
            finger: id,
            position,
        }),
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(Message::TouchLost { finger: id })
        }
        _ if status == event::Status::Captured => None,
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized {
                width: size.width,
                height: size.height,
            })
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
