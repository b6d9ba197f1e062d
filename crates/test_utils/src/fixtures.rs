//! Common fixture values for the registration test suites
//!
//! Tests pin the clock to [`TemporalFixtures::test_now`] so that dates of
//! birth derived from it sit exactly on the boundaries they mean to probe.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Fixed instants and dates for deterministic tests
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant every pinned-clock test treats as "now":
    /// 2024-06-15 12:00:00 UTC
    pub fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// The calendar date of [`Self::test_now`]
    pub fn test_today() -> NaiveDate {
        Self::test_now().date_naive()
    }

    /// A date of birth comfortably over the minimum age
    pub fn adult_date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1985, 6, 15).unwrap()
    }

    /// Eighteenth birthday falls exactly on [`Self::test_today`]
    pub fn exactly_eighteen_date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(2006, 6, 15).unwrap()
    }

    /// Turns eighteen the day after [`Self::test_today`]
    pub fn underage_date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(2006, 6, 16).unwrap()
    }
}

/// Well-formed string values for submissions
pub struct StringFixtures;

impl StringFixtures {
    /// A policy reference matching the required format
    pub fn policy_reference() -> &'static str {
        "XY-987654"
    }

    /// A second, distinct well-formed policy reference
    pub fn other_policy_reference() -> &'static str {
        "AB-123456"
    }

    /// An email accepted by the portal's restricted pattern
    pub fn email() -> &'static str {
        "janedoe@example.com"
    }

    /// An email rejected by the portal's restricted pattern
    pub fn invalid_email() -> &'static str {
        "invalid-email"
    }
}
