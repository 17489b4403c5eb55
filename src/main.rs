use std::sync::Arc;

use anyhow::Context;
use chat_relay::{config::Config, routes, state::AppState, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = Config::from_env().context("failed to read configuration")?;
    let state = Arc::new(AppState::from_config(&config));
    let app = routes::create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        public_dir = %config.public_dir.display(),
        "Server running on http://localhost:{}",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
