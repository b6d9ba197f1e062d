//! Persisted customer model
//!
//! A [`CustomerRecord`] is created only through a successful registration and
//! is never mutated or deleted by this core. The identifier is assigned by
//! the store, not the caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;

/// A durable customer registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Store-assigned identifier, unique and monotonically increasing
    pub id: CustomerId,
    /// Customer's first name
    pub first_name: String,
    /// Customer's last name
    pub last_name: String,
    /// Policy reference, unique across all records
    pub policy_reference: String,
    /// Date of birth, when supplied at registration
    pub date_of_birth: Option<NaiveDate>,
    /// Email address, when supplied at registration
    pub email: Option<String>,
    /// UTC instant the registration was accepted
    pub registered_at: DateTime<Utc>,
}

/// Insert payload for a new customer: the accepted submission fields plus
/// the registration timestamp. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub policy_reference: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl NewCustomer {
    /// Completes the record with the identifier the store assigned
    pub fn into_record(self, id: CustomerId) -> CustomerRecord {
        CustomerRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            policy_reference: self.policy_reference,
            date_of_birth: self.date_of_birth,
            email: self.email,
            registered_at: self.registered_at,
        }
    }
}
