//! Keyboard bindings for page navigation

use serde::{Deserialize, Serialize};

/// Abstract navigation keys
///
/// The host maps concrete key events onto these; typically ArrowRight and
/// Space advance, ArrowLeft goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    /// Advance to the next page
    Advance,
    /// Go back to the previous page
    Back,
}
