//! Test data builders
//!
//! Builder for constructing registration submissions with sensible defaults,
//! so tests specify only the fields they care about.

use chrono::NaiveDate;

use domain_registration::RegistrationSubmission;

use crate::fixtures::StringFixtures;

/// Builder for [`RegistrationSubmission`] test data.
///
/// Defaults to a structurally valid submission with an email and no date of
/// birth, registered against [`StringFixtures::policy_reference`].
pub struct SubmissionBuilder {
    first_name: String,
    last_name: String,
    policy_reference: String,
    date_of_birth: Option<NaiveDate>,
    email: Option<String>,
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            policy_reference: StringFixtures::policy_reference().to_string(),
            date_of_birth: None,
            email: Some(StringFixtures::email().to_string()),
        }
    }

    /// Sets the first name
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = name.into();
        self
    }

    /// Sets the last name
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = name.into();
        self
    }

    /// Sets the policy reference
    pub fn with_policy_reference(mut self, reference: impl Into<String>) -> Self {
        self.policy_reference = reference.into();
        self
    }

    /// Sets the date of birth
    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Clears both contact details
    pub fn without_contact_details(mut self) -> Self {
        self.date_of_birth = None;
        self.email = None;
        self
    }

    /// Builds the submission
    pub fn build(self) -> RegistrationSubmission {
        RegistrationSubmission {
            first_name: self.first_name,
            last_name: self.last_name,
            policy_reference: self.policy_reference,
            date_of_birth: self.date_of_birth,
            email: self.email,
        }
    }
}
