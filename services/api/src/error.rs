//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::update::UpdateError;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Payload failed validation; carries every collected defect
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Modify request arrived with no fields at all
    #[error("No fields supplied")]
    EmptyBody,

    /// Modify request had fields, but none from the allow-list
    #[error("No valid fields to update")]
    NoValidFields,

    /// Login failed; one generic message for unknown email and wrong password
    #[error("Invalid credentials")]
    Unauthorized,

    /// Target record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Backing store failure
    #[error("Database error")]
    Database(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            ApiError::EmptyBody => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "No fields supplied" }),
            ),
            ApiError::NoValidFields => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "No valid fields to update" }),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Invalid credentials" }),
            ),
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{resource} not found") }),
            ),
            // The store's error text stays in the server log, never in the response
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Database error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UpdateError> for ApiError {
    fn from(err: UpdateError) -> Self {
        match err {
            UpdateError::NoValidFields => ApiError::NoValidFields,
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(vec!["title is required".into()])
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::EmptyBody.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NoValidFields.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Game").into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_unauthorized_body_is_generic() {
        // Unknown email and wrong password both map to this same variant,
        // so the client sees one indistinguishable body shape.
        let response = ApiError::Unauthorized.into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Invalid credentials" }));
    }

    #[tokio::test]
    async fn test_empty_body_distinct_from_no_valid_fields() {
        let empty = to_bytes(ApiError::EmptyBody.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let no_valid = to_bytes(
            ApiError::NoValidFields.into_response().into_body(),
            usize::MAX,
        )
        .await
        .unwrap();
        assert_ne!(empty, no_valid);
    }
}
