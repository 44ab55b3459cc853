// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Message returned whenever an advertisement id does not resolve
pub const NOT_FOUND_MESSAGE: &str = "Advertisement not found";

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and error code
#[derive(Error, Debug)]
pub enum AdsError {
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AdsError {
    /// Not-found error for an advertisement lookup
    pub fn not_found() -> Self {
        AdsError::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    /// Stable machine-readable code for the error body
    pub fn code(&self) -> &'static str {
        match self {
            AdsError::NotFound(_) => "NOT_FOUND",
            AdsError::DatabaseError(_) => "DATABASE_ERROR",
            AdsError::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<sqlx::Error> for AdsError {
    fn from(e: sqlx::Error) -> Self {
        AdsError::DatabaseError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AdsError {
    fn from(e: validator::ValidationErrors) -> Self {
        AdsError::ValidationError(e.to_string())
    }
}

/// Convert AdsError to HTTP response
/// DOCUMENTATION: `detail` carries the human readable message, `error` the structured envelope
impl ResponseError for AdsError {
    fn error_response(&self) -> HttpResponse {
        // Database internals are logged at the repository, not leaked to clients
        let message = match self {
            AdsError::DatabaseError(_) => "Database error".to_string(),
            other => other.to_string(),
        };

        let body = json!({
            "detail": message,
            "error": {
                "code": self.code(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AdsError::NotFound(_) => StatusCode::NOT_FOUND,
            AdsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdsError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(AdsError::not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AdsError::ValidationError("price".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AdsError::DatabaseError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_not_found_body() {
        let response = AdsError::not_found().error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["detail"], "Advertisement not found");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"]["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_database_error_is_not_leaked() {
        let response = AdsError::DatabaseError("relation \"secret\" does not exist".into())
            .error_response();

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["detail"], "Database error");
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    }
}
