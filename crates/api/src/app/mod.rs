//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared, read-only catalog and the page builders
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query parsing and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use travelstore_catalog::Product;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over `catalog` (public entrypoint used by `main.rs`).
pub fn build_app(catalog: Vec<Product>) -> Router {
    let services = Arc::new(services::AppServices::new(catalog));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_context))
                .layer(Extension(services)),
        )
}
