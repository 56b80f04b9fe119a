//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `API_HOST`: bind address of the API listener, default `0.0.0.0`
//! - `API_PORT`: default `8000`
//! - `CORS_ORIGINS`: comma-separated allowed origins, default
//!   `http://localhost:3000,http://127.0.0.1:3000` (the site listener under
//!   either local host name)
//!
//! The site listener's address comes from the Leptos configuration, not from
//! here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API_HOST: {0:?}")]
    InvalidHost(String),
    #[error("invalid API_PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),
    #[error("CORS_ORIGINS lists no origins")]
    NoOrigins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub api_addr: SocketAddr,
    pub cors_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_host(std::env::var("API_HOST").ok().as_deref())?;
        let port = parse_port(std::env::var("API_PORT").ok().as_deref())?;
        let cors_origins = parse_origins(std::env::var("CORS_ORIGINS").ok().as_deref())?;
        Ok(Self { api_addr: SocketAddr::new(host, port), cors_origins })
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = raw.map_or(DEFAULT_API_HOST, str::trim);
    raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(DEFAULT_API_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

pub(crate) fn parse_origins(raw: Option<&str>) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins = raw
        .unwrap_or(DEFAULT_CORS_ORIGINS)
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(|origin| HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_owned())))
        .collect::<Result<Vec<_>, _>>()?;
    if origins.is_empty() {
        return Err(ConfigError::NoOrigins);
    }
    Ok(origins)
}
