use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reel_core::ProfileError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Profile(e) => {
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Profile(ProfileError::Internal(_)) => ErrorBody {
                error: "INTERNAL",
                message: "Internal server error.".into(),
            },
            Self::Profile(e) => ErrorBody {
                error: e.code(),
                message: e.to_string(),
            },
            Self::MalformedPayload(_) => ErrorBody {
                error: "MALFORMED_PAYLOAD",
                message: self.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Profile(ProfileError::Internal(e)) = &self {
            tracing::error!("request failed: {e:#}");
        }
        (self.status(), Json(self.body())).into_response()
    }
}
