//! Fable Player - Countdown Display
//!
//! A recurring countdown to a fixed target instant. The host drives it at a
//! fixed 1-second period (the crate owns no timer thread) and republishes the
//! four fields it returns; once the remainder becomes non-positive the
//! celebratory message is published exactly once and the countdown goes
//! permanently silent.
//!
//! The countdown is read-only with respect to the rest of the system: its
//! only input is wall-clock time, injected per tick so tests are
//! deterministic.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use fable_countdown::{Countdown, CountdownUpdate};
//!
//! let target = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
//! let mut countdown = Countdown::new(target, "Happy New Year 2026!");
//!
//! let now = Utc.with_ymd_and_hms(2025, 12, 30, 21, 56, 56).unwrap();
//! match countdown.tick(now) {
//!     Some(CountdownUpdate::Remaining(fields)) => {
//!         assert_eq!(fields.display(), ["01", "02", "03", "04"]);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

#![forbid(unsafe_code)]

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// The four countdown fields, decomposed by integer floor division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownFields {
    /// Whole days remaining
    pub days: u64,
    /// Hours remaining after days (0 - 23)
    pub hours: u64,
    /// Minutes remaining after hours (0 - 59)
    pub minutes: u64,
    /// Seconds remaining after minutes (0 - 59)
    pub seconds: u64,
}

impl CountdownFields {
    fn from_seconds(total: u64) -> Self {
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    /// The fields as zero-padded two-digit strings, in display order
    pub fn display(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

/// One published countdown update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CountdownUpdate {
    /// Time remains; republish the four fields
    Remaining(CountdownFields),
    /// The target instant was reached; published exactly once
    Completed(String),
}

/// Countdown to a fixed target instant
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Utc>,
    message: String,
    finished: bool,
}

impl Countdown {
    /// Create a countdown toward `target` with a completion message
    pub fn new(target: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            target,
            message: message.into(),
            finished: false,
        }
    }

    /// Recompute the remainder against `now`
    ///
    /// Returns the fields while time remains, the completion message the
    /// first time the remainder is non-positive, and `None` on every call
    /// after that (the timer is considered cancelled; no further
    /// recomputation happens).
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<CountdownUpdate> {
        if self.finished {
            return None;
        }

        let remaining = self.target - now;
        if remaining > TimeDelta::zero() {
            // Truncation only affects the displayed fields; a remainder under
            // one second still counts as remaining and shows 00 00 00 00.
            Some(CountdownUpdate::Remaining(CountdownFields::from_seconds(
                remaining.num_seconds() as u64,
            )))
        } else {
            self.finished = true;
            Some(CountdownUpdate::Completed(self.message.clone()))
        }
    }

    /// Recompute against an injected clock (convenience over [`Self::tick`])
    pub fn tick_with(&mut self, clock: &dyn fable_core::Clock) -> Option<CountdownUpdate> {
        self.tick(clock.now())
    }

    /// Whether the countdown has reached its target and gone silent
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The target instant
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }
}
