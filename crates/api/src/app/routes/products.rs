use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use travelstore_catalog::ProductId;

use crate::app::errors::ApiError;
use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/options", get(list_options))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let state = match params.into_filter_state() {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };

    let listing = services.listing(state);
    tracing::info!(
        count = listing.count(),
        empty = listing.is_empty(),
        "product listing served"
    );

    (StatusCode::OK, Json(dto::listing_to_json(listing.snapshot()))).into_response()
}

pub async fn list_options() -> impl IntoResponse {
    Json(dto::options_to_json())
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProductId = id.parse().map_err(ApiError::InvalidId)?;
    let product = services.product(id)?;
    Ok(Json(dto::product_to_json(product)))
}
