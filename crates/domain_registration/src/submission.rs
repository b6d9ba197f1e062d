//! Registration submission model
//!
//! A [`RegistrationSubmission`] is the ephemeral input to the registration
//! workflow. Field-shape rules (lengths, formats) are declared on the type
//! itself; cross-record rules such as policy-reference uniqueness live in
//! the registry.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Required shape of a policy reference: two uppercase letters, a hyphen,
/// six digits (e.g. `XY-987654`).
pub static POLICY_REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}-\d{6}$").expect("policy reference pattern is valid"));

/// Accepted email shape for the customer portal: at least four alphanumeric
/// characters, an `@`, at least two alphanumeric characters, ending in
/// `.com` or `.co.uk`. Deliberately narrower than RFC 5322.
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]{4,}@[A-Za-z0-9]{2,}\.(com|co\.uk)$")
        .expect("email pattern is valid")
});

/// A customer-registration submission for the insurance portal.
///
/// At least one of `date_of_birth` or `email` must be present; that is a
/// business rule checked during registration rather than a field-shape rule,
/// so it is not expressed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationSubmission {
    /// Customer's first name
    #[validate(length(
        min = 3,
        max = 50,
        message = "First name must be between 3 and 50 characters"
    ))]
    pub first_name: String,

    /// Customer's last name
    #[validate(length(
        min = 3,
        max = 50,
        message = "Last name must be between 3 and 50 characters"
    ))]
    pub last_name: String,

    /// Reference of the policy the customer is registering against
    #[validate(regex(
        path = *POLICY_REFERENCE_PATTERN,
        message = "Policy reference must be in format XX-999999 (two capital letters, hyphen, six digits)"
    ))]
    pub policy_reference: String,

    /// Customer's date of birth, if supplied
    pub date_of_birth: Option<NaiveDate>,

    /// Customer's email address, if supplied
    #[validate(regex(
        path = *EMAIL_PATTERN,
        message = "An email address must contain at least 4 characters, followed by an '@', at least 2 more characters, and end with '.com' or '.co.uk'"
    ))]
    pub email: Option<String>,
}

impl RegistrationSubmission {
    /// Returns true when the submission carries a usable contact-or-birthdate
    /// detail. An empty email string counts as absent.
    pub fn has_contact_or_birthdate(&self) -> bool {
        self.date_of_birth.is_some() || self.email.as_deref().is_some_and(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_reference_pattern() {
        assert!(POLICY_REFERENCE_PATTERN.is_match("AB-123456"));
        assert!(!POLICY_REFERENCE_PATTERN.is_match("ab-123456"));
        assert!(!POLICY_REFERENCE_PATTERN.is_match("AB-12345"));
        assert!(!POLICY_REFERENCE_PATTERN.is_match("AB-1234567"));
        assert!(!POLICY_REFERENCE_PATTERN.is_match("AB123456"));
        assert!(!POLICY_REFERENCE_PATTERN.is_match("ABC-123456"));
        assert!(!POLICY_REFERENCE_PATTERN.is_match(""));
    }

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_PATTERN.is_match("janedoe@example.com"));
        assert!(EMAIL_PATTERN.is_match("user1234@host.co.uk"));
        assert!(!EMAIL_PATTERN.is_match("jd@example.com")); // local part too short
        assert!(!EMAIL_PATTERN.is_match("janedoe@e.com")); // domain too short
        assert!(!EMAIL_PATTERN.is_match("jane.doe@example.com")); // dot in local part
        assert!(!EMAIL_PATTERN.is_match("janedoe@example.org"));
        assert!(!EMAIL_PATTERN.is_match("invalid-email"));
    }

    #[test]
    fn test_has_contact_or_birthdate() {
        let mut submission = RegistrationSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            policy_reference: "XY-987654".to_string(),
            date_of_birth: None,
            email: None,
        };
        assert!(!submission.has_contact_or_birthdate());

        submission.email = Some(String::new());
        assert!(!submission.has_contact_or_birthdate());

        submission.email = Some("janedoe@example.com".to_string());
        assert!(submission.has_contact_or_birthdate());

        submission.email = None;
        submission.date_of_birth = NaiveDate::from_ymd_opt(1990, 1, 1);
        assert!(submission.has_contact_or_birthdate());
    }

    #[test]
    fn test_submission_serialization() {
        let submission = RegistrationSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            policy_reference: "XY-987654".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 15),
            email: Some("janedoe@example.com".to_string()),
        };

        let json = serde_json::to_string(&submission).unwrap();
        let deserialized: RegistrationSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, submission);
    }
}
