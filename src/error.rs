//! Error types for Bookshelf

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::multipart::MultipartError;
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes returned in API error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchBook = 2,
    NoSuchDocument = 3,
    BadValue = 4,
    StorageFailure = 5,
    UnsupportedDocument = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported document: {0}")]
    UnsupportedMedia(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] upon::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::BadRequest(format!("Invalid form upload: {}", e.body_text()))
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    /// HTTP status and error code for this error
    pub fn status(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::DocumentNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchDocument),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchBook),
            AppError::Validation(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue)
            }
            AppError::UnsupportedMedia(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ErrorCode::UnsupportedDocument,
            ),
            AppError::Storage(_) | AppError::Serialization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::StorageFailure)
            }
            AppError::Template(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure)
            }
        }
    }

    /// Message safe to show to a client
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::DocumentNotFound(msg)
            | AppError::Validation(msg)
            | AppError::BadRequest(msg)
            | AppError::UnsupportedMedia(msg) => msg.clone(),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                "Storage error".to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Storage error".to_string()
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                "Internal server error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let message = self.public_message();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, code) = AppError::NotFound("Book 'Dune' not found".into()).status();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::NoSuchBook);

        let (status, code) = AppError::DocumentNotFound("missing.pdf".into()).status();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::NoSuchDocument);

        let (status, _) = AppError::Validation("bad year".into()).status();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, code) = AppError::UnsupportedMedia("image/png".into()).status();
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(code, ErrorCode::UnsupportedDocument);
    }

    #[test]
    fn test_storage_message_is_generic() {
        let err = AppError::Storage(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "/secret/path",
        ));
        assert_eq!(err.public_message(), "Storage error");
    }
}
