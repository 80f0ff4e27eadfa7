use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::error;
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with. Client-input problems map to 4xx
/// responses, storage and database problems to 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no file field found in the multipart payload")]
    MissingFile,

    #[error("unsupported media type '{0}', expected image/*")]
    InvalidMediaType(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("multipart error: {0}")]
    Multipart(String),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<actix_multipart::MultipartError> for ApiError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        ApiError::Multipart(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile
            | ApiError::InvalidMediaType(_)
            | ApiError::BadRequest(_)
            | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // 500s carry the underlying error message for diagnostics; client
        // errors only get the explanation.
        let body = if status.is_server_error() {
            error!("request failed: {}", self);
            json!({
                "success": false,
                "message": "internal error while processing the request",
                "error": self.to_string(),
            })
        } else {
            json!({ "success": false, "message": self.to_string() })
        };

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(ApiError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidMediaType("text/plain".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn io_errors_map_to_500() {
        let err = ApiError::Io(std::io::Error::other("disk on fire"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
