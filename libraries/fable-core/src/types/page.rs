//! Page type for the navigable sequence

use super::ids::PageId;
use serde::{Deserialize, Serialize};

/// One full-viewport content section
///
/// Pages form a fixed, ordered sequence. Exactly one page is active at any
/// time; activation is owned by the navigator, not the page itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Unique page identifier
    pub id: PageId,

    /// Display title
    pub title: String,
}

impl Page {
    /// Create a new page
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: PageId::new(id),
            title: title.into(),
        }
    }
}
