//! HTTP application wiring (axum router + service state).
//!
//! Layout:
//! - `services.rs`: delegate-store wiring and the write-once binding
//! - `routes.rs`: the `init`/`invoke`/`query` surface
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppState;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(state)))
}
