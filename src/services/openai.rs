// src/services/openai.rs
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const MODEL: &str = "gpt-4o-mini";
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that receives cleaned text. \
Respond with short sections that use clear headings or bullet lists so the answer is easy to scan.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// The fixed system instruction followed by the caller's text as the user turn.
    pub fn for_text(text: impl Into<String>) -> Self {
        Self {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: text.into(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: Some(ResponseMessage {
                    content: Some(content.into()),
                }),
            }],
        }
    }

    /// Trimmed content of the first choice, or an empty string.
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}")]
    Api {
        status: StatusCode,
        message: Option<String>,
        body: String,
    },

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    pub const FALLBACK_MESSAGE: &'static str = "Something went wrong";

    /// Builds an `Api` error from a non-success response body, pulling
    /// `error.message` out of it when present.
    pub fn from_response(status: StatusCode, body: String) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|e| e.message);
        Self::Api {
            status,
            message,
            body,
        }
    }

    /// Human readable message for the caller. The API's own error message
    /// wins, then the error's description, then a fixed fallback.
    pub fn user_message(&self) -> String {
        let candidate = match self {
            Self::Api { message, .. } => message.clone(),
            Self::Transport(e) => Some(e.to_string()),
            Self::Decode(e) => Some(e.to_string()),
        };
        candidate
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| Self::FALLBACK_MESSAGE.to_string())
    }

    /// Raw upstream payload, if one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, UpstreamError>;
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, UpstreamError> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::from_response(status, body));
        }

        let completion: CompletionResponse = serde_json::from_str(&body)?;
        debug!(choices = completion.choices.len(), "chat completion received");
        Ok(completion)
    }
}
