//! Shared test utilities for the registration test suites
//!
//! Provides submission builders and fixture values used by the domain and
//! API tests. Production code never depends on this crate.

pub mod builders;
pub mod fixtures;

pub use builders::SubmissionBuilder;
pub use fixtures::{StringFixtures, TemporalFixtures};
