//! Navigation events
//!
//! Emitted into a pending queue as navigation state changes; the host drains
//! them to update the rendering surface.

use fable_core::types::PageId;
use serde::{Deserialize, Serialize};

/// Events emitted by the navigator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// The active page changed
    PageChanged {
        /// New active page index
        index: usize,
        /// Identifier of the new active page
        page_id: PageId,
        /// Progress fraction as a percentage: `(index + 1) / page_count * 100`
        progress_percent: f64,
    },

    /// The viewport should scroll smoothly back to the top
    ScrolledToTop,

    /// The back-to-top affordance crossed its visibility threshold
    BackToTopVisibilityChanged {
        /// Whether the affordance should now be shown
        visible: bool,
    },
}
