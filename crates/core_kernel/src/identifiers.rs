//! Strongly-typed identifiers for domain entities
//!
//! Using a newtype wrapper around the store-assigned integer provides type
//! safety and prevents accidental mixing with other numeric values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered customer.
///
/// Customer identifiers are assigned by the persistent store on insert
/// (a `BIGSERIAL` sequence), are unique, and increase monotonically.
/// They are never chosen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wraps a store-assigned identifier value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<CustomerId> for i64 {
    fn from(id: CustomerId) -> i64 {
        id.0
    }
}
