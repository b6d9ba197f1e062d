//! Registration DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_registration::RegistrationSubmission;

#[derive(Debug, Deserialize)]
pub struct RegisterCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub policy_reference: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

impl RegisterCustomerRequest {
    pub fn into_submission(self) -> RegistrationSubmission {
        RegistrationSubmission {
            first_name: self.first_name,
            last_name: self.last_name,
            policy_reference: self.policy_reference,
            date_of_birth: self.date_of_birth,
            email: self.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub customer_id: i64,
    pub message: String,
}
