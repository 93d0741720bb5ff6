//! Domain types shared across Fable Player crates

mod ids;
mod page;

pub use ids::{PageId, TrackId};
pub use page::Page;
