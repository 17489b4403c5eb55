// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::openai::UpstreamError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Text is required")]
    Validation,

    #[error("Server not configured for OpenAI")]
    NotConfigured,

    #[error("upstream call failed: {0}")]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::Upstream(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.public_message(),
        });
        (self.status(), body).into_response()
    }
}
