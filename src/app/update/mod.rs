use std::time::Duration;
use storybook_core::SettleTicket;

mod core;
mod gestures;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    /// Deliver `Message::TransitionSettled(ticket)` once `delay` has elapsed.
    ScheduleSettle {
        ticket: SettleTicket,
        delay: Duration,
    },
}
