use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API-boundary errors. Every handler returns `Result<_, ApiError>` and the
/// `IntoResponse` impl maps variants to status codes + JSON bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal detail stays in the logs, not the response body.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            match self {
                ApiError::Database(_) => "Internal server error".to_string(),
                ApiError::Internal(_) => "Internal server error".to_string(),
                other => other.to_string(),
            }
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::BadRequest("No file provided".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Submission").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Upstream("OCR processing failed".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ApiError::NotFound("Submission").to_string(),
            "Submission not found"
        );
    }
}
