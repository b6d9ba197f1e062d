//! Registration handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::registration::{RegisterCustomerRequest, RegistrationResponse};
use crate::{error::ApiError, AppState};

/// Registers a new customer for the insurance portal.
///
/// Returns 201 Created with the store-assigned customer identifier, 422 for
/// structural or business-rule rejections, and 409 when the policy reference
/// is already registered.
pub async fn register_customer(
    State(state): State<AppState>,
    Json(request): Json<RegisterCustomerRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), ApiError> {
    let customer_id = state.registry.register(request.into_submission()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            customer_id: customer_id.value(),
            message: "Customer registration successful".to_string(),
        }),
    ))
}
