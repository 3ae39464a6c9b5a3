//! HTTP API: exposes the storefront view models (catalog listing, home page,
//! footer) as JSON for an external renderer.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
