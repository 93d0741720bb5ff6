//! Fable Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Fable Player.
//!
//! Fable Player drives a guided, page-based presentation: a fixed sequence of
//! pages navigated linearly or by direct selection, decorated with a small set
//! of independently controllable audio tracks, a countdown display, and a
//! share action. This crate provides the foundational building blocks shared
//! by the component crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Page`, `PageId`, `TrackId`
//! - **Capability Traits**: `ListenStore` (persisted counter), `Clock`
//! - **Error Handling**: Unified `FableError` and `Result` types
//!
//! Platform-specific capabilities (media playback, clipboard, native share,
//! durable storage) are injected through traits so component logic can be
//! driven by synthetic events in tests, independent of any rendering surface.
//!
//! # Example
//!
//! ```rust
//! use fable_core::types::{Page, PageId};
//! use fable_core::storage::MemoryListenStore;
//! use fable_core::ListenStore;
//!
//! let page = Page::new("welcome", "Welcome");
//! assert_eq!(page.id, PageId::new("welcome"));
//!
//! let store = MemoryListenStore::new();
//! assert_eq!(store.get().unwrap(), 0);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{FableError, Result};
pub use storage::{JsonFileListenStore, MemoryListenStore};
pub use traits::{Clock, ListenStore, SystemClock};
pub use types::{Page, PageId, TrackId};
