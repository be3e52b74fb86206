//! Relay configuration parsed from environment variables.
//!
//! Read once at startup. `.env` is loaded by `main` before this runs.

use std::time::Duration;

use reqwest::Url;

pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be a boolean (1/0, true/false, yes/no, on/off), got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Backend REST base, e.g. `http://localhost:3000/api`. No trailing slash.
    pub backend_url: String,
    /// Origin that serves uploaded files. No trailing slash.
    pub asset_origin: String,
    /// Send outbound `localhost` calls to `127.0.0.1` instead.
    pub rewrite_localhost: bool,
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub max_body_bytes: usize,
    pub port: u16,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Optional:
    /// - `BACKEND_API_URL`: falls back to `PUBLIC_API_URL`, then `http://localhost:3000/api`
    /// - `ASSET_ORIGIN`: backend URL with a trailing `/api` removed
    /// - `RELAY_REWRITE_LOCALHOST`: default true
    /// - `RELAY_REQUEST_TIMEOUT_SECS`, `RELAY_CONNECT_TIMEOUT_SECS`: transport default when unset
    /// - `RELAY_MAX_BODY_BYTES`: default 10 MiB
    /// - `PORT`: default 3001
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed URLs, numbers or booleans.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed URLs, numbers or booleans.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let (backend_var, backend_raw) = match get("BACKEND_API_URL") {
            Some(v) => ("BACKEND_API_URL", v),
            None => match get("PUBLIC_API_URL") {
                Some(v) => ("PUBLIC_API_URL", v),
                None => ("BACKEND_API_URL", DEFAULT_BACKEND_API_URL.to_string()),
            },
        };
        let backend_url = validate_url(backend_var, &backend_raw)?;

        let asset_origin = match get("ASSET_ORIGIN") {
            Some(v) => validate_url("ASSET_ORIGIN", &v)?,
            None => default_asset_origin(&backend_url),
        };

        let rewrite_localhost = match get("RELAY_REWRITE_LOCALHOST") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidBool { var: "RELAY_REWRITE_LOCALHOST", value: v })?,
            None => true,
        };

        let request_timeout = parse_number::<u64>("RELAY_REQUEST_TIMEOUT_SECS", get("RELAY_REQUEST_TIMEOUT_SECS"))?
            .map(Duration::from_secs);
        let connect_timeout = parse_number::<u64>("RELAY_CONNECT_TIMEOUT_SECS", get("RELAY_CONNECT_TIMEOUT_SECS"))?
            .map(Duration::from_secs);
        let max_body_bytes =
            parse_number("RELAY_MAX_BODY_BYTES", get("RELAY_MAX_BODY_BYTES"))?.unwrap_or(DEFAULT_MAX_BODY_BYTES);
        let port = parse_number("PORT", get("PORT"))?.unwrap_or(DEFAULT_PORT);

        Ok(Self { backend_url, asset_origin, rewrite_localhost, request_timeout, connect_timeout, max_body_bytes, port })
    }
}

/// Parse a boolean flag: `1/true/yes/on` or `0/false/no/off`, case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    raw.map(|v| v.parse::<T>().map_err(|_| ConfigError::InvalidNumber { var, value: v }))
        .transpose()
}

fn validate_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidUrl { var, value: raw.to_string() }),
    }
}

/// `http://host:3000/api` -> `http://host:3000`.
fn default_asset_origin(backend_url: &str) -> String {
    backend_url.strip_suffix("/api").unwrap_or(backend_url).to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
