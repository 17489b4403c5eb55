use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    services::openai::CompletionRequest,
    state::{Relay, SharedState},
};

/// `POST /api/chat`: forwards `text` to the upstream model and returns its reply.
pub async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());
    relay(state, headers, body).instrument(span).await
}

async fn relay(
    state: SharedState,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let request = ChatRequest::from_parts(&headers, &body);
    let text = request.text()?;

    let client = match &state.relay {
        Relay::Configured(client) => client,
        Relay::Unconfigured => {
            error!(
                "OPENAI_API_KEY is missing. Set it in your environment before starting the server."
            );
            return Err(AppError::NotConfigured);
        }
    };

    info!(chars = text.chars().count(), "relaying chat request");

    let completion = match client.complete(CompletionRequest::for_text(text)).await {
        Ok(completion) => completion,
        Err(e) => {
            error!(
                error = %e.user_message(),
                upstream_body = e.body().unwrap_or(""),
                "OpenAI API error"
            );
            return Err(AppError::Upstream(e));
        }
    };

    let reply = completion.first_content();
    info!(reply_chars = reply.chars().count(), "chat reply ready");
    Ok(Json(ChatReply { reply }))
}
