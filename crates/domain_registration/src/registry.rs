//! Customer registry
//!
//! The registry owns the registration workflow: structural validation,
//! business-rule evaluation, and persistence. Rules are evaluated in a fixed
//! order and the first failure short-circuits; persistence is only attempted
//! once every rule has passed, so a rejected submission never mutates the
//! store.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{error, info, warn};

use core_kernel::{Clock, CustomerId};

use crate::customer::NewCustomer;
use crate::error::{RegistrationError, RejectionReason};
use crate::ports::{CustomerStore, StoreError};
use crate::submission::RegistrationSubmission;
use crate::validator::validate_structure;

/// Minimum age, in whole years, for portal registration.
pub const MINIMUM_AGE_YEARS: i32 = 18;

/// Owns the durable customer collection and assigns identifiers through it.
pub struct Registry {
    store: Arc<dyn CustomerStore>,
    clock: Arc<dyn Clock>,
}

impl Registry {
    pub fn new(store: Arc<dyn CustomerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Registers a customer, returning the store-assigned identifier.
    ///
    /// Evaluation order, first failure short-circuiting:
    /// 1. Structural validation (no store access).
    /// 2. Policy-reference uniqueness against existing records.
    /// 3. Contact-or-birthdate presence.
    /// 4. Minimum age, when a date of birth is supplied.
    ///
    /// A store-reported uniqueness violation on insert is reported as the
    /// same duplicate rejection as the pre-check: the check-then-insert
    /// sequence is not atomic, and a losing concurrent insert must not be
    /// surfaced as an infrastructure failure.
    pub async fn register(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<CustomerId, RegistrationError> {
        validate_structure(&submission).map_err(|violations| {
            warn!(
                policy_reference = %submission.policy_reference,
                violation_count = violations.len(),
                "registration submission failed structural validation"
            );
            RegistrationError::Structural(violations)
        })?;

        let existing = self
            .store
            .find_by_policy_reference(&submission.policy_reference)
            .await
            .map_err(|err| {
                error!(error = %err, "policy reference lookup failed");
                RegistrationError::Infrastructure(err)
            })?;

        if existing.is_some() {
            return Err(self.reject(
                &submission,
                RejectionReason::DuplicatePolicyReference {
                    reference: submission.policy_reference.clone(),
                },
            ));
        }

        if !submission.has_contact_or_birthdate() {
            return Err(self.reject(&submission, RejectionReason::ContactDetailsRequired));
        }

        if let Some(date_of_birth) = submission.date_of_birth {
            if age_in_years(date_of_birth, self.clock.today()) < MINIMUM_AGE_YEARS {
                return Err(self.reject(&submission, RejectionReason::UnderMinimumAge));
            }
        }

        let customer = NewCustomer {
            first_name: submission.first_name,
            last_name: submission.last_name,
            policy_reference: submission.policy_reference,
            date_of_birth: submission.date_of_birth,
            email: submission.email,
            registered_at: self.clock.now(),
        };

        match self.store.insert(customer).await {
            Ok(customer_id) => {
                info!(%customer_id, "customer registration successful");
                Ok(customer_id)
            }
            // Lost the race to a concurrent insert with the same reference:
            // same rejection as the pre-check.
            Err(StoreError::DuplicatePolicyReference { reference }) => {
                warn!(
                    policy_reference = %reference,
                    "registration lost uniqueness race on insert"
                );
                Err(RegistrationError::BusinessRule(
                    RejectionReason::DuplicatePolicyReference { reference },
                ))
            }
            Err(err) => {
                error!(error = %err, "customer registration failed in the store");
                Err(RegistrationError::Infrastructure(err))
            }
        }
    }

    fn reject(
        &self,
        submission: &RegistrationSubmission,
        reason: RejectionReason,
    ) -> RegistrationError {
        warn!(
            policy_reference = %submission.policy_reference,
            %reason,
            "registration submission rejected"
        );
        RegistrationError::BusinessRule(reason)
    }
}

/// Whole-year age as of `today`, by calendar-aware subtraction: the year
/// difference, minus one if the birth month/day has not yet occurred this
/// year. `today` is the UTC calendar date; no timezone normalization is
/// attempted.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (date_of_birth.month(), date_of_birth.day()) > (today.month(), today.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_after_birthday() {
        let dob = NaiveDate::from_ymd_opt(1990, 3, 10).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(age_in_years(dob, today), 34);
    }

    #[test]
    fn test_age_before_birthday() {
        let dob = NaiveDate::from_ymd_opt(1990, 9, 10).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(age_in_years(dob, today), 33);
    }

    #[test]
    fn test_age_on_birthday() {
        let dob = NaiveDate::from_ymd_opt(2006, 6, 15).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(age_in_years(dob, today), 18);
    }

    #[test]
    fn test_age_day_before_birthday() {
        let dob = NaiveDate::from_ymd_opt(2006, 6, 16).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(age_in_years(dob, today), 17);
    }

    #[test]
    fn test_age_leap_day_birth() {
        let dob = NaiveDate::from_ymd_opt(2008, 2, 29).unwrap();

        // Feb 29 has not "occurred" on Feb 28 of a common year.
        let before = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(age_in_years(dob, before), 17);

        let after = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(age_in_years(dob, after), 18);
    }
}
