use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use core::{PlanValidationError, UnknownCategoryError, UnknownGroupError};
use database::StoreError;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InternalError(format!("JSON error: {}", err))
    }
}

impl From<PlanValidationError> for ApiError {
    fn from(err: PlanValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<UnknownGroupError> for ApiError {
    fn from(err: UnknownGroupError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<UnknownCategoryError> for ApiError {
    fn from(err: UnknownCategoryError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PlanNotFound(_) | StoreError::ActivityNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            StoreError::WrongPlan { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
