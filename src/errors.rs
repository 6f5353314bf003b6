// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("Company not found with id: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Convert FeedbackError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for FeedbackError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            FeedbackError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            FeedbackError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
            }
            FeedbackError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            FeedbackError::NotFound(_) => StatusCode::NOT_FOUND,
            FeedbackError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FeedbackError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}
