/// Error types for Meal Service
///
/// All failures surface at the HTTP boundary; the store operations themselves
/// are total and never construct an error. Errors are converted to JSON
/// responses for API clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for meal-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request failed schema validation (bad type, unknown enum value)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal server error (metrics encoding is the only producer)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

/// Funnel body deserialization failures through AppError so 400 bodies are uniform
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// Same for query-string failures (unknown order_by/order values)
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}
