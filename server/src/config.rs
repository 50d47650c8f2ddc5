//! Server configuration parsed from environment variables.
//!
//! `.env` files are loaded by `main` through `dotenvy` before this runs, so
//! values may come from either source.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `STOREFRONT_API_UPSTREAM` is not an absolute http(s) URL.
    #[error("invalid STOREFRONT_API_UPSTREAM: {0} (expected http:// or https:// URL)")]
    InvalidUpstream(String),

    /// `STOREFRONT_PROXY_TIMEOUT_SECS` is not a positive integer.
    #[error("invalid STOREFRONT_PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the remote shop API, without trailing slash.
    pub api_upstream: String,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from process environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STOREFRONT_API_UPSTREAM`: default `http://127.0.0.1:8000`
    /// - `STOREFRONT_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_upstream = match non_empty(lookup("STOREFRONT_API_UPSTREAM")) {
            Some(raw) => parse_upstream(&raw)?,
            None => DEFAULT_API_UPSTREAM.to_owned(),
        };

        let proxy_timeout_secs = match non_empty(lookup("STOREFRONT_PROXY_TIMEOUT_SECS")) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };

        Ok(Self { port, api_upstream, proxy_timeout_secs })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidUpstream(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
