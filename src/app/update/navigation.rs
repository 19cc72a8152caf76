use super::super::state::{App, PageTurn};
use super::Effect;
use std::time::Instant;
use storybook_core::{SettleTicket, Tilt, Transition};
use tracing::{debug, info, trace};

impl App {
    pub(super) fn handle_open_book(&mut self) {
        if self.navigator.open() {
            self.tilt = Tilt::NEUTRAL;
            self.swipe.cancel();
            self.active_finger = None;
            info!("Opened the book");
        }
    }

    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        let transition = self.navigator.next();
        self.begin_transition(transition, effects);
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        let transition = self.navigator.prev();
        self.begin_transition(transition, effects);
    }

    pub(super) fn handle_go_home(&mut self, effects: &mut Vec<Effect>) {
        let transition = self.navigator.go_home();
        if transition.is_some() {
            info!("Returning to the cover");
        }
        self.begin_transition(transition, effects);
    }

    pub(super) fn handle_select_chapter(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let transition = self.navigator.select_chapter(index);
        if transition.is_some() {
            info!(chapter = index + 1, "Jumping to chapter");
        }
        self.begin_transition(transition, effects);
    }

    pub(super) fn handle_transition_settled(&mut self, ticket: SettleTicket) {
        match self.navigator.settle(ticket) {
            Some(_) => {
                self.turn = None;
                if self.navigator.is_open() {
                    info!(
                        page = self.navigator.current_page() + 1,
                        total = self.navigator.total_pages(),
                        "Navigated to page"
                    );
                }
            }
            None => trace!(ticket = ticket.id(), "Ignoring settle for a stale transition"),
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        let duration = self.config.settle_delay();
        if let Some(turn) = self.turn.as_mut() {
            turn.advance(now, duration);
        }
    }

    /// Record the visual turn and schedule the settle for an accepted command.
    fn begin_transition(&mut self, transition: Option<Transition>, effects: &mut Vec<Effect>) {
        let Some(transition) = transition else {
            debug!(
                page = self.navigator.current_page(),
                animating = self.navigator.is_animating(),
                "Navigation command ignored"
            );
            return;
        };
        self.swipe.cancel();
        self.turn = Some(PageTurn::begin(transition, Instant::now()));
        effects.push(Effect::ScheduleSettle {
            ticket: transition.ticket(),
            delay: self.config.settle_delay(),
        });
    }
}
