//! Fable Player - Page Navigation
//!
//! The navigator owns the current page index over a fixed, ordered page
//! sequence and keeps the progress fraction and position markers in sync
//! with it. All navigation requests (direct index, id lookup, next/previous,
//! keyboard, enter/restart affordances) funnel through a single bounds-checked
//! choke point; out-of-range requests degrade to silent no-ops because the
//! calling layer is direct UI event dispatch with no error channel.
//!
//! The navigator holds no rendering state. It publishes `NavigationEvent`s
//! into a pending queue the host drains with [`Navigator::take_events`], in
//! the same pull style the playback panel uses.
//!
//! # Example
//!
//! ```rust
//! use fable_core::types::Page;
//! use fable_navigation::{NavKey, Navigator};
//!
//! let mut nav = Navigator::new(vec![
//!     Page::new("welcome", "Welcome"),
//!     Page::new("story", "Our Story"),
//!     Page::new("finale", "Finale"),
//! ]);
//!
//! nav.handle_key(NavKey::Advance);
//! assert_eq!(nav.current_index(), 1);
//! assert_eq!(nav.progress_percent(), 2.0 / 3.0 * 100.0);
//! ```

#![forbid(unsafe_code)]

mod events;
mod input;
mod navigator;

pub use events::NavigationEvent;
pub use input::NavKey;
pub use navigator::Navigator;

/// Scroll depth (logical pixels) past which the back-to-top affordance shows
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;
