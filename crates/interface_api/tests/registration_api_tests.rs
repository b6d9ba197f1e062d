//! HTTP-level registration tests
//!
//! Runs the router over the in-memory store with a pinned clock and checks
//! the status-code contract: 201 on success, 422 for correctable
//! rejections, 409 for duplicate policy references, and an opaque 500 for
//! store failures.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use core_kernel::FixedClock;
use domain_registration::InMemoryCustomerStore;
use interface_api::config::ApiConfig;
use interface_api::dto::registration::RegistrationResponse;
use interface_api::{create_router, AppState};
use test_utils::{StringFixtures, SubmissionBuilder, TemporalFixtures};

fn test_server() -> (TestServer, Arc<InMemoryCustomerStore>) {
    let store = Arc::new(InMemoryCustomerStore::new());
    let clock = Arc::new(FixedClock::at(TemporalFixtures::test_now()));
    let state = AppState::new(store.clone(), clock, ApiConfig::default());
    let server = TestServer::new(create_router(state)).expect("router should start");
    (server, store)
}

#[tokio::test]
async fn register_valid_request_returns_created_with_customer_id() {
    let (server, store) = test_server();

    let response = server
        .post("/api/v1/registrations")
        .json(&SubmissionBuilder::new().build())
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: RegistrationResponse = response.json();
    assert!(body.customer_id > 0);
    assert_eq!(body.message, "Customer registration successful");
    assert_eq!(store.record_count().await, 1);
}

#[tokio::test]
async fn register_invalid_email_returns_validation_error() {
    let (server, store) = test_server();

    let response = server
        .post("/api/v1/registrations")
        .json(
            &SubmissionBuilder::new()
                .with_email(StringFixtures::invalid_email())
                .build(),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "validation_error");
    let details = body["details"].as_array().expect("details should be set");
    assert!(details[0].as_str().unwrap().starts_with("email:"));

    // Structural rejection happens before any store access.
    assert_eq!(store.record_count().await, 0);
}

#[tokio::test]
async fn register_duplicate_policy_reference_returns_conflict() {
    let (server, store) = test_server();

    server
        .post("/api/v1/registrations")
        .json(&SubmissionBuilder::new().build())
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/v1/registrations")
        .json(&SubmissionBuilder::new().build())
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "conflict");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains(StringFixtures::policy_reference()));
    assert_eq!(store.record_count().await, 1);
}

#[tokio::test]
async fn register_underage_customer_returns_validation_error() {
    let (server, _store) = test_server();

    let submission = SubmissionBuilder::new()
        .without_contact_details()
        .with_date_of_birth(TemporalFixtures::underage_date_of_birth())
        .build();

    let response = server.post("/api/v1/registrations").json(&submission).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Customer must be at least 18 years old"
    );
}

#[tokio::test]
async fn register_missing_contact_details_returns_validation_error() {
    let (server, _store) = test_server();

    let response = server
        .post("/api/v1/registrations")
        .json(&SubmissionBuilder::new().without_contact_details().build())
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["message"], "Either Date of Birth or Email must be provided");
}

#[tokio::test]
async fn store_failure_returns_opaque_internal_error() {
    let (server, store) = test_server();
    store.set_unavailable(true);

    let response = server
        .post("/api/v1/registrations")
        .json(&SubmissionBuilder::new().build())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "internal_error");
    // No internal detail leaks through the response body.
    assert_eq!(
        body["message"],
        "An error occurred processing your registration"
    );
}

#[tokio::test]
async fn health_endpoints_report_status() {
    let (server, store) = test_server();

    server.get("/health").await.assert_status(StatusCode::OK);
    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::OK);

    store.set_unavailable(true);
    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
