//! Time-of-day source.
//!
//! The one place the service asks "what time is it" is the default start
//! time of a newly created session. Going through a trait keeps that
//! default deterministic in tests.

use time::{OffsetDateTime, Time};

/// Source of the current time of day.
pub trait Clock: Send + Sync {
    /// The current wall-clock time of day (UTC).
    fn now_time(&self) -> Time;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_time(&self) -> Time {
        OffsetDateTime::now_utc().time()
    }
}

/// A clock pinned to one time, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Time);

impl Clock for FixedClock {
    fn now_time(&self) -> Time {
        self.0
    }
}
