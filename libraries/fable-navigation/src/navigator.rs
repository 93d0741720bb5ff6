//! Navigator - page index state machine
//!
//! States are page indices `0..page_count`; transitions are any index to any
//! valid index through `go_to_index`. There is no terminal state: the restart
//! affordance returns to index 0 from anywhere.

use crate::events::NavigationEvent;
use crate::input::NavKey;
use crate::BACK_TO_TOP_THRESHOLD;
use fable_core::types::{Page, PageId};
use tracing::debug;

/// Page navigation controller
///
/// Owns the current index over a fixed page sequence, the derived progress
/// fraction, and the position-marker model. Never persisted; a full reload
/// of the host reconstructs it at index 0.
#[derive(Debug)]
pub struct Navigator {
    pages: Vec<Page>,
    current: usize,
    back_to_top_visible: bool,

    // Event queue for UI synchronization
    pending_events: Vec<NavigationEvent>,
}

impl Navigator {
    /// Create a navigator over a fixed page sequence, starting at index 0
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            current: 0,
            back_to_top_visible: false,
            pending_events: Vec::new(),
        }
    }

    // ===== Navigation =====

    /// Jump to the page at `index`
    ///
    /// The single choke point all navigation funnels through. Out-of-range
    /// indices are silent no-ops. A jump to the already-active index still
    /// re-publishes (clicking the active marker re-scrolls to the top, as
    /// the original affordance does).
    pub fn go_to_index(&mut self, index: usize) {
        if index >= self.pages.len() {
            debug!(index, page_count = self.pages.len(), "page index out of range");
            return;
        }

        self.current = index;

        let page_id = self.pages[index].id.clone();
        self.pending_events.push(NavigationEvent::PageChanged {
            index,
            page_id,
            progress_percent: self.progress_percent(),
        });
        self.pending_events.push(NavigationEvent::ScrolledToTop);
    }

    /// Jump to the page with the given id; unknown ids are no-ops
    pub fn go_to_id(&mut self, page_id: &PageId) {
        match self.pages.iter().position(|p| &p.id == page_id) {
            Some(index) => self.go_to_index(index),
            None => debug!(%page_id, "unknown page id"),
        }
    }

    /// Advance to the next page (no-op at the last page)
    pub fn next(&mut self) {
        if self.current + 1 < self.pages.len() {
            self.go_to_index(self.current + 1);
        }
    }

    /// Go back to the previous page (no-op at the first page)
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.go_to_index(self.current - 1);
        }
    }

    /// Enter the presentation proper (the first page after the cover)
    pub fn enter(&mut self) {
        self.go_to_index(1);
    }

    /// Restart from the first page
    pub fn restart(&mut self) {
        self.go_to_index(0);
    }

    /// Handle a navigation key press
    ///
    /// The boundary guard here duplicates `go_to_index`'s bounds check; both
    /// layers must agree, which the tests verify.
    pub fn handle_key(&mut self, key: NavKey) {
        match key {
            NavKey::Advance => {
                if self.current + 1 < self.pages.len() {
                    self.go_to_index(self.current + 1);
                }
            }
            NavKey::Back => {
                if self.current > 0 {
                    self.go_to_index(self.current - 1);
                }
            }
        }
    }

    // ===== Scroll handling =====

    /// Report the current scroll depth
    ///
    /// Emits `BackToTopVisibilityChanged` only when the visibility actually
    /// flips across the threshold.
    pub fn handle_scroll(&mut self, scroll_y: f64) {
        let visible = scroll_y > BACK_TO_TOP_THRESHOLD;
        if visible != self.back_to_top_visible {
            self.back_to_top_visible = visible;
            self.pending_events
                .push(NavigationEvent::BackToTopVisibilityChanged { visible });
        }
    }

    /// Whether the back-to-top affordance is currently shown
    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    // ===== State Queries =====

    /// Current page index
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The currently active page
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    /// Number of pages in the sequence
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Progress fraction as a percentage: `(current + 1) / page_count * 100`
    pub fn progress_percent(&self) -> f64 {
        if self.pages.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.pages.len() as f64 * 100.0
    }

    /// Position-marker model: exactly the current slot is active
    pub fn marker_states(&self) -> Vec<bool> {
        (0..self.pages.len()).map(|i| i == self.current).collect()
    }

    // ===== Events =====

    /// Drain pending navigation events
    pub fn take_events(&mut self) -> Vec<NavigationEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
