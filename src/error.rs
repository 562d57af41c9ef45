use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response body
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Custom error type for API endpoints
///
/// Store failures carry their cause so it can be logged, but only the generic
/// `detail` message ever reaches the client.
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be decoded (missing/mistyped field, bad JSON)
    InvalidBody { status: StatusCode, message: String },
    /// A field decoded but failed validation
    InvalidField { field: &'static str, message: String },
    /// No item has the requested id
    ItemNotFound,
    /// No route matches the request path
    RouteNotFound,
    /// Store operation failed while serving a request
    Store {
        detail: &'static str,
        source: StoreError,
    },
    /// Health check could not reach the store
    Unhealthy(StoreError),
    /// A setting the endpoint depends on is absent
    NotConfigured(&'static str),
}

impl ApiError {
    pub fn store(detail: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| ApiError::Store { detail, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InvalidBody { status, message } => (status, message),
            ApiError::InvalidField { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("{}: {}", field, message),
            ),
            ApiError::ItemNotFound => (StatusCode::NOT_FOUND, "Item not found".to_string()),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            ApiError::Store { detail, source } => {
                tracing::error!(error = %source, "{}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, detail.to_string())
            }
            ApiError::Unhealthy(source) => {
                tracing::error!(error = %source, "Health check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service unhealthy".to_string(),
                )
            }
            ApiError::NotConfigured(detail) => {
                (StatusCode::SERVICE_UNAVAILABLE, detail.to_string())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
