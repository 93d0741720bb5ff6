/// Capability traits for Fable Player
///
/// Host platforms implement these to supply durable storage and wall-clock
/// time. Component crates only ever see the trait, which keeps their logic
/// deterministic under test.
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Persistent listen-counter storage
///
/// A single non-negative integer under a fixed well-known key, surviving
/// reloads of the hosting environment. An absent value reads as zero.
///
/// The counter is only ever mutated from the track-completion path, so
/// implementations need no internal synchronization beyond interior
/// mutability.
pub trait ListenStore {
    /// Read the stored count (absent value reads as 0)
    fn get(&self) -> Result<u64>;

    /// Persist a new count
    fn set(&self, count: u64) -> Result<()>;
}

/// Wall-clock source
///
/// The countdown display has no inputs besides wall-clock time; injecting
/// the clock makes its output reproducible in tests.
pub trait Clock {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
