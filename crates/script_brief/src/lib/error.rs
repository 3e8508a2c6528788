use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{parser::InvalidUrl, yt::TranscriptError};

/// Request-scoped pipeline outcome, tagged so the HTTP layer can pick a
/// status code without downcasting.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("youtube_url and main_keywords are required")]
    MissingFields,
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrl),
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidUrl(_) | ApiError::Transcript(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
