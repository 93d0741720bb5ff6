//! Fable Player - Share Action
//!
//! Shares the presentation's location reference through a three-tier
//! capability cascade: native share dispatch if the environment supports it,
//! otherwise a clipboard copy confirmed by a transient notice, otherwise a
//! blocking prompt displaying the reference for manual copying. Each tier is
//! attempted only if the previous one is unsupported or fails - this is a
//! cascade over alternative mechanisms, not a retry.
//!
//! The three capabilities are injected as traits so the cascade is fully
//! testable with fakes.
//!
//! # Example
//!
//! ```rust
//! use fable_share::{share, Clipboard, NativeShare, Prompter, ShareOutcome, ShareRequest};
//! use fable_core::Result;
//!
//! struct NoShare;
//! impl NativeShare for NoShare {
//!     fn is_supported(&self) -> bool {
//!         false
//!     }
//!     fn share(&self, _request: &ShareRequest) -> Result<()> {
//!         unreachable!()
//!     }
//! }
//!
//! struct OkClipboard;
//! impl Clipboard for OkClipboard {
//!     fn write_text(&self, _text: &str) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! struct SilentPrompter;
//! impl Prompter for SilentPrompter {
//!     fn notify(&self, _message: &str) {}
//!     fn prompt(&self, _message: &str, _value: &str) {}
//! }
//!
//! let request = ShareRequest::for_url("https://example.com/story");
//! let outcome = share(&request, &NoShare, &OkClipboard, &SilentPrompter);
//! assert_eq!(outcome, ShareOutcome::Copied);
//! ```

#![forbid(unsafe_code)]

use fable_core::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What gets shared: title, text, and the location reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    /// Share sheet title
    pub title: String,

    /// Accompanying text
    pub text: String,

    /// The location reference being shared
    pub url: String,
}

impl ShareRequest {
    /// Build a request around a bare location reference
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            url: url.into(),
        }
    }
}

/// Native share dispatch capability
pub trait NativeShare {
    /// Whether the environment offers native share at all
    fn is_supported(&self) -> bool;

    /// Dispatch the native share sheet
    fn share(&self, request: &ShareRequest) -> Result<()>;
}

/// Clipboard write capability
pub trait Clipboard {
    /// Copy text to the clipboard
    fn write_text(&self, text: &str) -> Result<()>;
}

/// User-notification surface
pub trait Prompter {
    /// Show a transient, non-blocking notice
    fn notify(&self, message: &str);

    /// Show a blocking prompt displaying `value` for manual copying
    fn prompt(&self, message: &str, value: &str);
}

/// Which tier of the cascade handled the share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareOutcome {
    /// Native share dispatched
    Shared,
    /// Reference copied to the clipboard, notice shown
    Copied,
    /// Blocking prompt shown for manual copying
    Prompted,
}

/// Notice shown after a successful clipboard copy
pub const COPY_NOTICE: &str = "Link copied to clipboard! Share it with your loved ones.";

/// Prompt label for the manual-copy fallback
pub const COPY_PROMPT: &str = "Copy this link to share:";

/// Run the share cascade
///
/// Tier order: native share, clipboard + notice, blocking prompt. Exactly
/// one tier takes effect.
pub fn share(
    request: &ShareRequest,
    native: &dyn NativeShare,
    clipboard: &dyn Clipboard,
    prompter: &dyn Prompter,
) -> ShareOutcome {
    if native.is_supported() {
        if let Err(e) = native.share(request) {
            debug!("native share failed, falling through: {e}");
        } else {
            return ShareOutcome::Shared;
        }
    }

    match clipboard.write_text(&request.url) {
        Ok(()) => {
            prompter.notify(COPY_NOTICE);
            ShareOutcome::Copied
        }
        Err(e) => {
            debug!("clipboard unavailable, prompting: {e}");
            prompter.prompt(COPY_PROMPT, &request.url);
            ShareOutcome::Prompted
        }
    }
}
