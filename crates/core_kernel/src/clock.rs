//! Time source abstraction
//!
//! The registration workflow stamps records with the current UTC instant and
//! computes ages against the current calendar date. Both come from a `Clock`
//! so that tests can pin time instead of racing the wall clock.
//!
//! The calendar date returned by [`Clock::today`] is the UTC date. A date of
//! birth supplied by a caller in another time zone can therefore disagree
//! with "today" by one day around midnight; this core does not attempt to
//! normalize that.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time for the registration core.
///
/// All operations that need "now" or "today" receive it through this trait,
/// keeping the core deterministic under test.
pub trait Clock: Send + Sync {
    /// Returns the current UTC instant
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always reports the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
