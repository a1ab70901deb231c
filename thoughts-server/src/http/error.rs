//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// One or more field rules violated (400)
    Validation(Vec<ValidationError>),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Identifier does not parse as a UUID (400)
    MalformedId { id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "messages": errors.iter().map(ToString::to_string).collect::<Vec<_>>()
                }),
            ),
            Self::NotFound { resource, .. } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": format!("{} not found", resource)
                }),
            ),
            Self::MalformedId { id } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid thought ID",
                    "message": format!("'{}' is not a valid thought ID", id)
                }),
            ),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "message": e.to_string()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400_with_all_messages() {
        let err = ApiError::Validation(vec![ValidationError::TooShort {
            field: "Message",
            min: 5,
        }]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["messages"][0], "Message must be at least 5 characters");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "Thought",
            id: "test".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Thought not found");
    }

    #[tokio::test]
    async fn malformed_id_is_400() {
        let err = ApiError::MalformedId {
            id: "not-an-id".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid thought ID");
    }

    #[tokio::test]
    async fn database_error_is_500() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn db_not_found_maps_to_not_found() {
        let err: ApiError = DbError::NotFound {
            resource: "Thought",
            id: "test".into(),
        }
        .into();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }
}
