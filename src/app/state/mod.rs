mod constants;
mod layout;

use crate::config::AppConfig;
use iced::Task;
use iced::touch::Finger;
use std::time::{Duration, Instant};
use storybook_core::{
    AssetCatalog, AssetResolver, BookNavigator, ContentProvider, PageKind, Region, StoryContent,
    SwipeTracker, Tilt, Transition, page_view,
};
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(crate) use layout::{BookLayout, leaf_geometry};

/// Visual progress of the in-flight page turn.
#[derive(Debug, Clone, Copy)]
pub(in crate::app) struct PageTurn {
    pub(in crate::app) transition: Transition,
    pub(in crate::app) started_at: Instant,
    pub(in crate::app) progress: f32,
}

impl PageTurn {
    pub(in crate::app) fn begin(transition: Transition, now: Instant) -> Self {
        PageTurn {
            transition,
            started_at: now,
            progress: 0.0,
        }
    }

    pub(in crate::app) fn advance(&mut self, now: Instant, duration: Duration) {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.progress = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };
    }
}

/// Core application state composed of sub-models.
pub struct App {
    pub(super) story: StoryContent,
    pub(super) assets: AssetCatalog,
    pub(super) config: AppConfig,
    pub(super) navigator: BookNavigator,
    pub(super) swipe: SwipeTracker,
    pub(super) active_finger: Option<Finger>,
    pub(super) tilt: Tilt,
    pub(super) layout: BookLayout,
    pub(super) turn: Option<PageTurn>,
}

impl App {
    pub(super) fn bootstrap(story: StoryContent, config: AppConfig) -> (App, Task<Message>) {
        let resolver = AssetResolver::new(config.assets_dir());
        let assets = AssetCatalog::scan(&resolver, story.chapters());
        let app = App::new(story, assets, config);
        info!(
            chapters = app.story.chapter_count(),
            pages = app.navigator.total_pages(),
            "Story ready"
        );
        (app, Task::none())
    }

    pub(super) fn new(story: StoryContent, assets: AssetCatalog, config: AppConfig) -> App {
        let config = config.sanitized();
        App {
            navigator: BookNavigator::for_content(&story),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            active_finger: None,
            tilt: Tilt::NEUTRAL,
            layout: BookLayout::compute(
                config.window_width,
                config.window_height,
                config.max_book_width,
            ),
            turn: None,
            story,
            assets,
            config,
        }
    }

    pub(super) fn current_page_kind(&self) -> Option<PageKind> {
        page_view(&self.story, self.navigator.current_page()).map(|view| view.kind())
    }

    /// Regions that own their touches on the page currently shown.
    pub(super) fn active_scroll_region(&self) -> Option<Region> {
        self.current_page_kind()
            .and_then(|kind| self.layout.scroll_region(kind))
    }
}
