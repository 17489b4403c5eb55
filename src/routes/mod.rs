// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use chat::chat_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

pub fn create_router(state: SharedState) -> Router {
    let public = state.public_dir.clone();
    let spa = ServeDir::new(&public).fallback(ServeFile::new(public.join("index.html")));

    Router::new()
        .route(
            "/api/chat",
            post(chat_handler).fallback_service(spa.clone()),
        )
        .fallback_service(spa)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
