use serde::Deserialize;
use serde_json::{json, Value};

use travelstore_catalog::{CategoryFilter, FilterState, ListingSnapshot, Product, SortKey};
use travelstore_pages::HomePage;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Listing query string: `?query=&category=&sort=`. Missing keys keep defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl ListProductsQuery {
    pub fn into_filter_state(self) -> Result<FilterState, ApiError> {
        let category = match self.category.as_deref() {
            None | Some("") => CategoryFilter::default(),
            Some(raw) => raw.parse::<CategoryFilter>().map_err(ApiError::InvalidCategory)?,
        };
        let sort = match self.sort.as_deref() {
            None | Some("") => SortKey::default(),
            Some(raw) => raw.parse::<SortKey>().map_err(ApiError::InvalidSort)?,
        };
        Ok(FilterState::new(self.query.unwrap_or_default(), category, sort))
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(p: &Product) -> Value {
    json!({
        "id": p.id_typed().get(),
        "name": p.name(),
        "price": p.price().as_decimal(),
        "price_cents": p.price().cents(),
        "price_display": p.price().to_string(),
        "category": p.category(),
        "image": p.image(),
        "rating": p.rating().value(),
        "full_stars": p.rating().full_stars(),
        "reviews": p.reviews(),
        "description": p.description(),
    })
}

/// The listing snapshot with each product enriched by `product_to_json`.
pub fn listing_to_json(snapshot: ListingSnapshot) -> Value {
    json!({
        "state": snapshot.state,
        "count": snapshot.count,
        "count_label": snapshot.count_label,
        "results": snapshot.results.iter().map(product_to_json).collect::<Vec<_>>(),
        "empty_state": snapshot.empty_state,
    })
}

pub fn options_to_json() -> Value {
    json!({
        "categories": CategoryFilter::options(),
        "sorts": SortKey::options(),
    })
}

pub fn home_to_json(page: &HomePage) -> Value {
    json!({
        "hero": page.hero,
        "features": page.features,
        "featured": {
            "title": page.featured.title,
            "subtitle": page.featured.subtitle,
            "products": page.featured.products.iter().map(product_to_json).collect::<Vec<_>>(),
            "add_to_cart": page.featured.add_to_cart,
            "view_all": page.featured.view_all,
        },
        "call_to_action": page.call_to_action,
    })
}
