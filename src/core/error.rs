use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type for unexpected faults
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Business-rule failures are NOT errors; they travel as
/// [`ServiceResult`](crate::core::result::ServiceResult) variants. `AppError`
/// covers the faults no business rule anticipates (storage unavailable,
/// broken configuration) and is caught at the HTTP boundary.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Storage faults (the in-memory store lock was poisoned)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
