//! Structural validation of registration submissions
//!
//! Structural checks are field-shape rules (presence, length, format) that
//! can be decided from the submission alone. Every violated rule is reported,
//! not just the first, so callers can surface all problems in one response.
//! Cross-record rules (uniqueness, age, contact presence) belong to the
//! registry and are not raised here.

use serde::Serialize;
use validator::Validate;

use crate::submission::RegistrationSubmission;

/// A single structural rule violation, tied to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Name of the submission field that failed
    pub field: String,
    /// Human-readable description of the violated rule
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks a submission against the declared field-shape rules.
///
/// Returns all violations, ordered by field name for stable output. Pure:
/// no store access and no side effects.
pub fn validate_structure(
    submission: &RegistrationSubmission,
) -> Result<(), Vec<FieldViolation>> {
    let errors = match submission.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                FieldViolation::new(field, message)
            })
        })
        .collect();

    // HashMap iteration order is unspecified; sort for deterministic reports.
    violations.sort_by(|a, b| a.field.cmp(&b.field));

    Err(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::POLICY_REFERENCE_PATTERN;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn valid_submission() -> RegistrationSubmission {
        RegistrationSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            policy_reference: "XY-987654".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 15),
            email: Some("janedoe@example.com".to_string()),
        }
    }

    fn violations_for(submission: &RegistrationSubmission) -> Vec<FieldViolation> {
        validate_structure(submission).unwrap_err()
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_structure(&valid_submission()).is_ok());
    }

    #[test]
    fn test_missing_optional_fields_are_structurally_valid() {
        let mut submission = valid_submission();
        submission.date_of_birth = None;
        submission.email = None;

        // The contact-or-birthdate rule is a business rule, not a shape rule.
        assert!(validate_structure(&submission).is_ok());
    }

    #[test]
    fn test_empty_first_name_rejected() {
        let mut submission = valid_submission();
        submission.first_name = String::new();

        let violations = violations_for(&submission);
        assert!(violations.iter().any(|v| v.field == "first_name"));
    }

    #[test]
    fn test_short_first_name_rejected() {
        let mut submission = valid_submission();
        submission.first_name = "Jo".to_string();

        let violations = violations_for(&submission);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "First name must be between 3 and 50 characters"
        );
    }

    #[test]
    fn test_overlong_last_name_rejected() {
        let mut submission = valid_submission();
        submission.last_name = "D".repeat(51);

        let violations = violations_for(&submission);
        assert!(violations.iter().any(|v| v.field == "last_name"));
    }

    #[test]
    fn test_name_length_boundaries_accepted() {
        let mut submission = valid_submission();
        submission.first_name = "Amy".to_string(); // 3 chars
        submission.last_name = "D".repeat(50); // 50 chars

        assert!(validate_structure(&submission).is_ok());
    }

    #[test]
    fn test_malformed_policy_reference_rejected() {
        for reference in ["", "xy-987654", "XY-98765", "XY987654", "XYZ-987654"] {
            let mut submission = valid_submission();
            submission.policy_reference = reference.to_string();

            let violations = violations_for(&submission);
            assert!(
                violations.iter().any(|v| v.field == "policy_reference"),
                "expected policy_reference violation for {reference:?}"
            );
        }
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut submission = valid_submission();
        submission.email = Some("invalid-email".to_string());

        let violations = violations_for(&submission);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "email");
        assert_eq!(
            violations[0].message,
            "An email address must contain at least 4 characters, followed by an '@', \
             at least 2 more characters, and end with '.com' or '.co.uk'"
        );
    }

    #[test]
    fn test_all_violations_collected() {
        let submission = RegistrationSubmission {
            first_name: "J".to_string(),
            last_name: String::new(),
            policy_reference: "nope".to_string(),
            date_of_birth: None,
            email: Some("also-bad".to_string()),
        };

        let violations = violations_for(&submission);
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            ["email", "first_name", "last_name", "policy_reference"]
        );
    }

    proptest! {
        #[test]
        fn prop_nonmatching_policy_reference_always_reported(
            reference in "[A-Za-z0-9 -]{0,12}"
        ) {
            prop_assume!(!POLICY_REFERENCE_PATTERN.is_match(&reference));

            let mut submission = valid_submission();
            submission.policy_reference = reference;

            let violations = validate_structure(&submission).unwrap_err();
            prop_assert!(violations.iter().any(|v| v.field == "policy_reference"));
        }
    }
}
