//! Product catalog for the storefront.
//!
//! This crate contains the catalog records and the listing view logic,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod listing;
pub mod product;
pub mod seed;

pub use filter::{apply, CategoryFilter, FilterState, SelectOption, SortKey};
pub use listing::{EmptyState, ListingSnapshot, ProductListing};
pub use product::{Category, NewProduct, Product, ProductId, Rating};
