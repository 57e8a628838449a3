//! HTTP API application wiring (Axum router + service wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `services.rs`: service wiring (the student directory behind the handlers)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `validate.rs`: request validation
//! - `dto.rs`: request/query DTOs and JSON mapping helpers
//! - `respond.rs`: the uniform response envelope
//! - `errors.rs`: directory-error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod errors;
pub mod respond;
pub mod routes;
pub mod services;
pub mod validate;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::build_services()))
}

/// Build the router against an explicit service set (tests, alternate stores).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(services)),
    )
}
