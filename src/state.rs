// src/state.rs
use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::config::Config;
use crate::services::openai::{ChatCompletion, OpenAiClient};

pub type SharedState = Arc<AppState>;

/// Whether the upstream API can be reached. Decided once at startup.
#[derive(Clone)]
pub enum Relay {
    Configured(Arc<dyn ChatCompletion>),
    Unconfigured,
}

impl Relay {
    pub fn from_config(config: &Config) -> Self {
        match &config.api_key {
            Some(key) => Self::Configured(Arc::new(OpenAiClient::new(
                key.clone(),
                config.base_url.clone(),
            ))),
            None => {
                warn!("OPENAI_API_KEY is not set; /api/chat will answer 500 until it is configured");
                Self::Unconfigured
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

pub struct AppState {
    pub relay: Relay,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(relay: Relay, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            relay,
            public_dir: public_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Relay::from_config(config), config.public_dir.clone())
    }
}
