//! Customer Registration Domain
//!
//! This crate implements the validation-and-persistence core of the customer
//! registration workflow:
//!
//! - [`RegistrationSubmission`] carries the caller's input and declares the
//!   field-shape rules.
//! - [`validator`] checks those rules and reports every violation.
//! - [`Registry`] evaluates the cross-record business rules (uniqueness of
//!   the policy reference, contact-or-birthdate presence, minimum age) and
//!   persists accepted submissions through the [`CustomerStore`] port.
//!
//! The outcome taxonomy separates caller-correctable rejections
//! (structural, business rule) from infrastructure failures, so invokers can
//! decide response shape and retry policy without inspecting messages.

pub mod customer;
pub mod error;
pub mod ports;
pub mod registry;
pub mod submission;
pub mod validator;

pub use customer::{CustomerRecord, NewCustomer};
pub use error::{RegistrationError, RejectionReason};
pub use ports::{CustomerStore, StoreError};
pub use registry::{age_in_years, Registry, MINIMUM_AGE_YEARS};
pub use submission::RegistrationSubmission;
pub use validator::{validate_structure, FieldViolation};

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::InMemoryCustomerStore;
