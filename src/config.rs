// src/config.rs
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::services::openai::DEFAULT_BASE_URL;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    Port {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid HOST {value:?}: {source}")]
    Host {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` puts the relay in degraded mode.
    pub api_key: Option<String>,
    pub base_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = match non_empty("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::Port { value, source })?,
            None => defaults.port,
        };

        let host: IpAddr = match non_empty("HOST") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::Host { value, source })?,
            None => defaults.host,
        };

        Ok(Self {
            api_key: non_empty("OPENAI_API_KEY"),
            base_url: non_empty("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            host,
            port,
            public_dir: non_empty("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
