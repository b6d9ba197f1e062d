//! Registration error taxonomy
//!
//! Outcomes are explicit values rather than unwound exceptions so callers
//! can tell a correctable rejection from a retryable infrastructure failure
//! without parsing messages:
//!
//! - [`RegistrationError::Structural`] - malformed or missing required
//!   fields, detected before any store access.
//! - [`RegistrationError::BusinessRule`] - a cross-record or derived-value
//!   rule failed; persistence was prevented.
//! - [`RegistrationError::Infrastructure`] - the store misbehaved; not
//!   caller-correctable and surfaced opaquely at the API boundary.

use thiserror::Error;

use crate::ports::StoreError;
use crate::validator::FieldViolation;

/// Why a submission was rejected by a business rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// The policy reference is already registered to another customer
    #[error("A customer with policy reference {reference} is already registered")]
    DuplicatePolicyReference { reference: String },

    /// Neither a date of birth nor an email address was supplied
    #[error("Either Date of Birth or Email must be provided")]
    ContactDetailsRequired,

    /// The customer's date of birth puts them under the minimum age
    #[error("Customer must be at least 18 years old")]
    UnderMinimumAge,
}

/// Failure modes of the registration workflow.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// One or more field-shape rules were violated
    #[error("submission failed structural validation ({} field(s))", .0.len())]
    Structural(Vec<FieldViolation>),

    /// A business rule rejected the submission
    #[error("{0}")]
    BusinessRule(RejectionReason),

    /// The persistent store failed; no record was written
    #[error("registration could not be completed: {0}")]
    Infrastructure(#[source] StoreError),
}

impl RegistrationError {
    /// True when the caller can fix the submission and retry
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RegistrationError::Structural(_) | RegistrationError::BusinessRule(_)
        )
    }
}
