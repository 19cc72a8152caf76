//! Page-flip navigation state machine.
//!
//! The navigator is the single owner of `NavigationState`. Every command
//! either starts a transition (and hands back a `Transition` whose settle the
//! caller must schedule) or is silently dropped. Flips never move one page at
//! a time: the flipped set is rebuilt as the full prefix before the target,
//! so stepping and jumping from the contents share one path.

use crate::content::ContentProvider;
use crate::pages::{narrative_page_for, total_pages};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, trace};

/// Default lock window; matches the page-turn visual of the view.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Render-relevant navigation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub is_open: bool,
    pub current_page: usize,
    pub flipped_pages: BTreeSet<usize>,
    pub is_animating: bool,
}

/// Identifies one in-flight transition so its settle can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SettleTicket(u64);

impl SettleTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Flip {
        from: usize,
        to: usize,
        ticket: SettleTicket,
    },
    Close {
        ticket: SettleTicket,
    },
}

impl Transition {
    pub fn ticket(&self) -> SettleTicket {
        match self {
            Transition::Flip { ticket, .. } | Transition::Close { ticket } => *ticket,
        }
    }

    /// True when the transition moves towards the end of the book.
    pub fn is_forward(&self) -> bool {
        matches!(self, Transition::Flip { from, to, .. } if to > from)
    }
}

#[derive(Debug, Clone)]
pub struct BookNavigator {
    total_pages: usize,
    state: NavigationState,
    in_flight: Option<Transition>,
    next_ticket: u64,
}

impl BookNavigator {
    pub fn new(chapter_count: usize) -> Self {
        Self {
            total_pages: total_pages(chapter_count),
            state: NavigationState::default(),
            in_flight: None,
            next_ticket: 0,
        }
    }

    pub fn for_content<P>(content: &P) -> Self
    where
        P: ContentProvider + ?Sized,
    {
        Self::new(content.chapter_count())
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn last_page(&self) -> usize {
        self.total_pages.saturating_sub(1)
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn flipped_pages(&self) -> &BTreeSet<usize> {
        &self.state.flipped_pages
    }

    pub fn is_flipped(&self, page: usize) -> bool {
        self.state.flipped_pages.contains(&page)
    }

    pub fn in_flight(&self) -> Option<Transition> {
        self.in_flight
    }

    fn is_idle_open(&self) -> bool {
        self.state.is_open && !self.state.is_animating
    }

    pub fn can_go_next(&self) -> bool {
        self.is_idle_open() && self.state.current_page < self.last_page()
    }

    pub fn can_go_prev(&self) -> bool {
        self.is_idle_open() && self.state.current_page > 0
    }

    /// Closed to open. Returns whether anything changed.
    pub fn open(&mut self) -> bool {
        if self.state.is_open {
            trace!("Open ignored; book already open");
            return false;
        }
        self.state.is_open = true;
        debug!(total_pages = self.total_pages, "Book opened");
        true
    }

    pub fn flip_to(&mut self, target: usize) -> Option<Transition> {
        if !self.is_idle_open() {
            trace!(
                target,
                is_open = self.state.is_open,
                is_animating = self.state.is_animating,
                "Flip dropped; navigator not idle"
            );
            return None;
        }
        if target >= self.total_pages {
            trace!(target, total_pages = self.total_pages, "Flip target out of range");
            return None;
        }

        let from = self.state.current_page;
        let transition = Transition::Flip {
            from,
            to: target,
            ticket: self.issue_ticket(),
        };
        self.state.is_animating = true;
        self.state.flipped_pages = (0..target).collect();
        self.state.current_page = target;
        self.in_flight = Some(transition);
        debug!(from, to = target, "Flipping pages");
        Some(transition)
    }

    pub fn next(&mut self) -> Option<Transition> {
        self.flip_to(self.state.current_page.saturating_add(1))
    }

    pub fn prev(&mut self) -> Option<Transition> {
        let target = self.state.current_page.checked_sub(1)?;
        self.flip_to(target)
    }

    pub fn select_chapter(&mut self, chapter_index: usize) -> Option<Transition> {
        self.flip_to(narrative_page_for(chapter_index))
    }

    /// Start closing the book. The pages snap back at once; `is_open` only
    /// drops once the transition settles.
    pub fn go_home(&mut self) -> Option<Transition> {
        if !self.is_idle_open() {
            trace!("Go home dropped; navigator not idle");
            return None;
        }
        let transition = Transition::Close {
            ticket: self.issue_ticket(),
        };
        self.state.is_animating = true;
        self.state.flipped_pages.clear();
        self.state.current_page = 0;
        self.in_flight = Some(transition);
        debug!("Closing book");
        Some(transition)
    }

    /// Complete the transition identified by `ticket`.
    pub fn settle(&mut self, ticket: SettleTicket) -> Option<Transition> {
        let transition = self.in_flight.filter(|t| t.ticket() == ticket)?;
        self.in_flight = None;
        self.state.is_animating = false;
        if matches!(transition, Transition::Close { .. }) {
            self.state.is_open = false;
        }
        debug!(
            ticket = ticket.id(),
            page = self.state.current_page,
            is_open = self.state.is_open,
            "Transition settled"
        );
        Some(transition)
    }

    fn issue_ticket(&mut self) -> SettleTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        SettleTicket(self.next_ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(end: usize) -> BTreeSet<usize> {
        (0..end).collect()
    }

    fn opened(chapters: usize) -> BookNavigator {
        let mut nav = BookNavigator::new(chapters);
        assert!(nav.open());
        nav
    }

    fn settle_flip(nav: &mut BookNavigator, target: usize) {
        let transition = nav.flip_to(target).expect("flip accepted");
        assert!(nav.settle(transition.ticket()).is_some());
    }

    #[test]
    fn starts_closed_and_empty() {
        let nav = BookNavigator::new(3);
        assert_eq!(nav.state(), &NavigationState::default());
        assert_eq!(nav.total_pages(), 7);
        assert!(!nav.can_go_next());
        assert!(!nav.can_go_prev());
    }

    #[test]
    fn open_is_idempotent() {
        let mut nav = BookNavigator::new(2);
        assert!(nav.open());
        assert!(!nav.open());
        assert!(nav.is_open());
        assert!(!nav.is_animating());
    }

    #[test]
    fn every_settled_flip_leaves_exact_prefix() {
        let mut nav = opened(4);
        for target in [0, 5, 8, 1, 3, 8, 0] {
            settle_flip(&mut nav, target);
            assert_eq!(nav.current_page(), target);
            assert_eq!(nav.flipped_pages(), &prefix(target));
            assert!(!nav.is_animating());
        }
    }

    #[test]
    fn flip_out_of_range_changes_nothing() {
        let mut nav = opened(2);
        settle_flip(&mut nav, 2);
        let before = nav.state().clone();
        assert!(nav.flip_to(5).is_none());
        assert!(nav.flip_to(usize::MAX).is_none());
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn flip_while_animating_changes_nothing() {
        let mut nav = opened(3);
        let first = nav.flip_to(3).expect("first flip");
        let during = nav.state().clone();
        assert!(nav.flip_to(5).is_none());
        assert!(nav.go_home().is_none());
        assert!(nav.select_chapter(0).is_none());
        assert_eq!(nav.state(), &during);
        assert_eq!(nav.settle(first.ticket()), Some(first));
    }

    #[test]
    fn flip_requires_open_book() {
        let mut nav = BookNavigator::new(3);
        assert!(nav.flip_to(1).is_none());
        assert_eq!(nav.state(), &NavigationState::default());
    }

    #[test]
    fn next_and_prev_stop_at_the_edges() {
        let mut nav = opened(1);
        assert!(nav.prev().is_none());
        let last = nav.last_page();
        settle_flip(&mut nav, last);
        let at_end = nav.state().clone();
        assert!(nav.next().is_none());
        assert_eq!(nav.state(), &at_end);

        let back = nav.prev().expect("prev from last");
        assert_eq!(
            back,
            Transition::Flip {
                from: 2,
                to: 1,
                ticket: back.ticket()
            }
        );
        assert!(!back.is_forward());
    }

    #[test]
    fn rapid_next_only_honors_first() {
        let mut nav = opened(3);
        let first = nav.next().expect("first next");
        assert!(first.is_forward());
        assert!(nav.next().is_none());
        nav.settle(first.ticket());

        let mut single = opened(3);
        let only = single.next().expect("single next");
        single.settle(only.ticket());
        assert_eq!(nav.state(), single.state());
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn select_chapter_matches_flip_to_narrative_page() {
        for chapter in 0..4 {
            let mut via_select = opened(4);
            let mut via_flip = opened(4);
            let a = via_select.select_chapter(chapter).expect("select");
            let b = via_flip.flip_to(2 * chapter + 1).expect("flip");
            via_select.settle(a.ticket());
            via_flip.settle(b.ticket());
            assert_eq!(via_select.state(), via_flip.state());
        }
        let mut nav = opened(4);
        assert!(nav.select_chapter(4).is_none());
    }

    #[test]
    fn go_home_resets_pages_immediately_and_closes_on_settle() {
        let mut nav = opened(3);
        settle_flip(&mut nav, 4);
        let close = nav.go_home().expect("go home");
        assert!(matches!(close, Transition::Close { .. }));
        assert!(nav.is_open());
        assert!(nav.is_animating());
        assert_eq!(nav.current_page(), 0);
        assert!(nav.flipped_pages().is_empty());

        nav.settle(close.ticket());
        assert_eq!(nav.state(), &NavigationState::default());
    }

    #[test]
    fn go_home_from_any_page_settles_to_initial_state() {
        for start in 0..7 {
            let mut nav = opened(3);
            settle_flip(&mut nav, start);
            let close = nav.go_home().expect("go home");
            nav.settle(close.ticket());
            assert_eq!(nav.state(), &NavigationState::default());
        }
    }

    #[test]
    fn go_home_while_closed_is_ignored() {
        let mut nav = BookNavigator::new(2);
        assert!(nav.go_home().is_none());
        assert_eq!(nav.state(), &NavigationState::default());
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut nav = opened(3);
        let first = nav.next().expect("first");
        nav.settle(first.ticket());
        let second = nav.next().expect("second");
        assert!(nav.settle(first.ticket()).is_none());
        assert!(nav.is_animating());
        assert_eq!(nav.settle(second.ticket()), Some(second));
        assert!(!nav.is_animating());
    }

    #[test]
    fn can_flags_track_position_and_lock() {
        let mut nav = opened(1);
        assert!(nav.can_go_next());
        assert!(!nav.can_go_prev());
        let t = nav.next().expect("next");
        assert!(!nav.can_go_next());
        assert!(!nav.can_go_prev());
        nav.settle(t.ticket());
        assert!(nav.can_go_next());
        assert!(nav.can_go_prev());
        assert!(nav.is_flipped(0));
        assert!(!nav.is_flipped(1));
    }

    #[test]
    fn empty_book_has_only_contents() {
        let mut nav = opened(0);
        assert_eq!(nav.total_pages(), 1);
        assert!(nav.next().is_none());
        assert!(nav.flip_to(0).is_some());
    }
}
