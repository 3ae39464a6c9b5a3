use std::sync::Arc;

use axum::{extract::Extension, Json};
use serde_json::Value;

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn home(Extension(services): Extension<Arc<AppServices>>) -> Json<Value> {
    Json(dto::home_to_json(&services.home()))
}

pub async fn footer(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<travelstore_pages::Footer> {
    Json(services.footer())
}
