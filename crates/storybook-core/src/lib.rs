//! Navigation core for the storybook viewer.
//!
//! Nothing in here knows about the GUI toolkit. The app crate feeds raw
//! commands, touch points and pointer positions in, and renders whatever
//! state comes back out:
//! - `navigation` owns the open/closed state, the current page, the flipped
//!   prefix and the animation lock.
//! - `gesture` turns touch sequences into next/previous commands.
//! - `pages` derives the page sequence from the chapter list.
//! - `content`, `chapter` and `assets` describe what is being read.

pub mod assets;
pub mod chapter;
pub mod content;
pub mod gesture;
pub mod navigation;
pub mod numerals;
pub mod pages;
pub mod tilt;

pub use assets::{AssetCatalog, AssetResolver};
pub use chapter::{Chapter, ImageCorner};
pub use content::{ContentProvider, CoverText, StoryContent, StoryLabels, load_story, parse_story};
pub use gesture::{GestureState, Region, ScrollRegions, SwipeDirection, SwipeTracker, TouchPoint};
pub use navigation::{BookNavigator, NavigationState, SettleTicket, Transition};
pub use numerals::NumeralSystem;
pub use pages::{PageKind, PageSlot, PageView, page_view, page_views};
pub use tilt::Tilt;
