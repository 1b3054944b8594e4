//! Error taxonomy for the drawing store.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inkboard_core::ValidationError;
use thiserror::Error;

/// The store's error taxonomy, mapped straight onto HTTP statuses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No identity attached to the request. Raised by the access gate
    /// before any storage code runs.
    #[error("Authentication required")]
    Unauthenticated,
    /// Missing id or ownership mismatch. One variant by construction:
    /// the response must never reveal whether the document exists but
    /// belongs to someone else.
    #[error("Drawing not found")]
    NotFound,
    /// Malformed document body, rejected before persistence.
    #[error("Invalid drawing: {0}")]
    Validation(String),
    /// Underlying store unavailable. Surfaced as-is; retry policy belongs
    /// to the caller.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (
                ApiError::Validation("bad".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::Storage("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_validation_error_converts() {
        let e: ApiError = ValidationError::EmptyStroke(0).into();
        assert!(matches!(e, ApiError::Validation(_)));
    }
}
