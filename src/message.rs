// src/message.rs
use axum::http::{HeaderMap, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Body of `POST /api/chat`. `text` is kept loosely typed so that a missing
/// field, `null` or a non-string all end up as the same validation error.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

impl ChatRequest {
    /// Parses a raw body. Anything that is not a JSON object yields an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Like `from_body`, but bodies not sent as `application/json` are ignored.
    pub fn from_parts(headers: &HeaderMap, body: &[u8]) -> Self {
        if is_json(headers) {
            Self::from_body(body)
        } else {
            Self::default()
        }
    }

    /// The text to forward, untouched, if it is a string with non-whitespace content.
    pub fn text(&self) -> Result<&str, AppError> {
        match &self.text {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
            _ => Err(AppError::Validation),
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
