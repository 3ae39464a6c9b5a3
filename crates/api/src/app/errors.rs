use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use travelstore_core::DomainError;

/// Errors surfaced by handlers, each mapped to a status and a stable code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidCategory(DomainError),

    #[error("{0}")]
    InvalidSort(DomainError),

    #[error("{0}")]
    InvalidId(DomainError),

    #[error("product {0}")]
    ProductNotFound(DomainError),
}

impl From<DomainError> for ApiError {
    /// Lookup failures from the domain layer; selector errors are mapped
    /// explicitly at the parse site.
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => ApiError::ProductNotFound(err),
            other => ApiError::InvalidId(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCategory(_) | ApiError::InvalidSort(_) | ApiError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ProductNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidCategory(_) => "invalid_category",
            ApiError::InvalidSort(_) => "invalid_sort",
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::ProductNotFound(_) => "not_found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::debug!(code = self.code(), error = %self, "request rejected");
        json_error(self.status(), self.code(), self.to_string())
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
