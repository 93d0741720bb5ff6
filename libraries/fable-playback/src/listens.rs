//! Persisted listen counter
//!
//! Counts natural track completions across all tracks and sessions. The
//! count is loaded once at construction and cached; each increment persists
//! best-effort through the injected store. A persistence failure is logged
//! and the in-memory count still advances, so the displayed number updates
//! synchronously with the completion that caused it.

use fable_core::ListenStore;
use tracing::warn;

/// Listen counter over an injected persistence capability
pub struct ListenCounter {
    store: Box<dyn ListenStore>,
    count: u64,
}

impl ListenCounter {
    /// Create a counter, loading the persisted value (absent or unreadable
    /// reads as 0)
    pub fn new(store: Box<dyn ListenStore>) -> Self {
        let count = store.get().unwrap_or_else(|e| {
            warn!("listen store unreadable, counting from 0: {e}");
            0
        });

        Self { store, count }
    }

    /// Current count
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Record one completed listen; returns the new count
    pub fn increment(&mut self) -> u64 {
        self.count += 1;

        if let Err(e) = self.store.set(self.count) {
            warn!(count = self.count, "failed to persist listen count: {e}");
        }

        self.count
    }
}

impl std::fmt::Debug for ListenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenCounter")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
