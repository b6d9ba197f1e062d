//! HTTP API Layer
//!
//! This crate provides the REST API for the customer registration core
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: registration and health endpoints
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: consistent error responses that distinguish
//!   caller-correctable rejections from opaque infrastructure failures
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(store, clock, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::Clock;
use domain_registration::{CustomerStore, Registry};

use crate::config::ApiConfig;
use crate::handlers::{health, registration};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub store: Arc<dyn CustomerStore>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn CustomerStore>, clock: Arc<dyn Clock>, config: ApiConfig) -> Self {
        Self {
            registry: Arc::new(Registry::new(store.clone(), clock)),
            store,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state (registry, store, configuration)
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no API prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Registration routes
    let registration_routes = Router::new().route("/", post(registration::register_customer));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1/registrations", registration_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
