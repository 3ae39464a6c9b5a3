use axum::{routing::get, Router};

pub mod pages;
pub mod products;
pub mod system;

/// Router for the JSON view-model endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .route("/home", get(pages::home))
        .route("/footer", get(pages::footer))
        .nest("/products", products::router())
}
