//! Time sources for history timestamps.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::time::Instant;

/// Where "now" comes from when a transition is recorded.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Shared handle used as part of the actor context.
pub type SharedClock = Arc<dyn Clock>;

/// Reads the system wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Wall time anchored once, then advanced by Tokio's monotonic clock.
///
/// Readings never go backwards, and they follow Tokio's paused time in tests, so a
/// timestamp recorded after `tokio::time::advance(15s)` is exactly 15 s later.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    wall_origin: DateTime<Utc>,
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    pub fn anchored_at(wall_origin: DateTime<Utc>) -> Self {
        Self {
            wall_origin,
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = self.origin.elapsed();
        match chrono::Duration::from_std(elapsed) {
            Ok(elapsed) => self.wall_origin + elapsed,
            Err(_) => self.wall_origin,
        }
    }
}
