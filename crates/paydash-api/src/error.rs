//! Error types for paydash-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paydash_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Upstream fetch failed: {message}")]
    Upstream { message: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() }).to_string();
        (self.status(), body).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::UnknownEmployee { id } => ApiError::BadRequest {
                message: format!("unknown employee: {}", id),
            },
            CoreError::Transport { message } => ApiError::Upstream { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let error: ApiError = CoreError::UnknownEmployee {
            id: "emp-999".to_string(),
        }
        .into();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = CoreError::Transport {
            message: "timeout".to_string(),
        }
        .into();
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    }
}
