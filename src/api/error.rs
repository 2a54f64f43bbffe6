use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::order::OrderError;

// ============================================================================
// API Error Mapping
// ============================================================================
//
// Domain errors translate to HTTP exactly once, here:
//
// - NotFound                      -> 404 {error}
// - EmptyItems / InvalidQuantity  -> 422 {error}
// - InsufficientStock             -> 409 {error}
// - Storage                       -> 500 {error, details}
//
// ============================================================================

#[derive(Debug)]
pub struct ApiError(pub OrderError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        ApiError(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::EmptyItems | OrderError::InvalidQuantity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            OrderError::InsufficientStock { .. } => StatusCode::CONFLICT,
            OrderError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match &self.0 {
            OrderError::Storage(_) => {
                // Internal detail stays minimal; the source error goes to the log
                tracing::error!(error = %self.0, "unexpected failure handling request");
                HttpResponse::build(self.status_code()).json(serde_json::json!({
                    "error": "Internal Server Error",
                    "details": self.0.to_string(),
                }))
            }
            other => HttpResponse::build(self.status_code()).json(serde_json::json!({
                "error": other.to_string(),
            })),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
