//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_registration::{RegistrationError, RejectionReason};

/// Body returned to callers when registration cannot be completed for a
/// reason they cannot correct. Deliberately carries no internal detail.
const OPAQUE_FAILURE_MESSAGE: &str = "An error occurred processing your registration";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String, Vec<String>),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Validation(msg, details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg,
                (!details.is_empty()).then_some(details),
            ),
            // The detail is already logged where it occurred; callers get an
            // opaque failure.
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                OPAQUE_FAILURE_MESSAGE.to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Structural(violations) => ApiError::Validation(
                "Registration submission failed validation".to_string(),
                violations.iter().map(|v| v.to_string()).collect(),
            ),
            RegistrationError::BusinessRule(reason @ RejectionReason::DuplicatePolicyReference { .. }) => {
                ApiError::Conflict(reason.to_string())
            }
            RegistrationError::BusinessRule(reason) => {
                ApiError::Validation(reason.to_string(), Vec::new())
            }
            RegistrationError::Infrastructure(err) => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_registration::{FieldViolation, StoreError};

    #[test]
    fn test_structural_errors_map_to_validation() {
        let err = RegistrationError::Structural(vec![FieldViolation::new(
            "email",
            "An email address must contain at least 4 characters",
        )]);

        match ApiError::from(err) {
            ApiError::Validation(_, details) => {
                assert_eq!(details.len(), 1);
                assert!(details[0].starts_with("email:"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_rejection_maps_to_conflict() {
        let err = RegistrationError::BusinessRule(RejectionReason::DuplicatePolicyReference {
            reference: "XY-987654".to_string(),
        });

        match ApiError::from(err) {
            ApiError::Conflict(message) => assert!(message.contains("XY-987654")),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_infrastructure_error_maps_to_internal() {
        let err = RegistrationError::Infrastructure(StoreError::Unavailable(
            "connection refused".to_string(),
        ));

        assert!(matches!(ApiError::from(err), ApiError::Internal(_)));
    }
}
