//! Asset relay: fetch uploaded files (profile and product images) from the
//! asset origin on behalf of the browser.
//!
//! GET only. The upstream body is streamed, not buffered.

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::StatusCode;
use reqwest::Url;
use tracing::{error, info, warn};

use super::rewrite_loopback;
use crate::config::RelayConfig;
use crate::error::ErrorCode;
use crate::state::AppState;

pub const ASSET_PREFIX: &str = "/api/uploads/";
pub const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";
pub const ASSET_ALLOW_METHODS: &str = "GET";
pub const DEFAULT_ASSET_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("invalid asset target {0}")]
    InvalidTarget(String),
    #[error("asset origin answered {0}")]
    Upstream(StatusCode),
    #[error("asset fetch failed: {0}")]
    Transport(String),
}

impl ErrorCode for AssetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) => "E_INVALID_TARGET",
            Self::Upstream(_) => "E_ASSET_NOT_FOUND",
            Self::Transport(_) => "E_ASSET_FETCH",
        }
    }

    /// Upstream failures keep the upstream status.
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidTarget(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(status) => *status,
            Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) | Self::Upstream(_) => "File not found",
            Self::Transport(_) => "Error fetching file",
        }
    }
}

/// A successful upstream answer whose body has not been read yet.
pub struct FetchedAsset {
    pub content_type: String,
    pub upstream: reqwest::Response,
}

/// `{asset_origin}/{path}`, with the loopback rewrite applied if enabled.
///
/// # Errors
///
/// Returns [`AssetError::InvalidTarget`] if the joined URL does not parse.
pub fn asset_url(config: &RelayConfig, path: &str) -> Result<Url, AssetError> {
    let raw = format!("{}/{}", config.asset_origin, path.trim_start_matches('/'));
    let mut url = Url::parse(&raw).map_err(|e| AssetError::InvalidTarget(format!("{raw}: {e}")))?;
    if config.rewrite_localhost {
        rewrite_loopback(&mut url);
    }
    Ok(url)
}

/// Request `path` from the asset origin.
///
/// # Errors
///
/// Returns [`AssetError::Upstream`] for a non-success upstream status and
/// [`AssetError::Transport`] when no response arrived.
pub async fn fetch(state: &AppState, path: &str) -> Result<FetchedAsset, AssetError> {
    let url = asset_url(&state.config, path)?;
    info!(url = %url, "fetching asset");

    let upstream = state
        .http
        .get(url.clone())
        .header(ACCEPT, "image/*")
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, url = %url, "asset fetch failed");
            AssetError::Transport(e.to_string())
        })?;

    let status = upstream.status();
    if !status.is_success() {
        warn!(%status, url = %url, "asset origin returned non-success status");
        return Err(AssetError::Upstream(status));
    }

    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_ASSET_CONTENT_TYPE)
        .to_string();
    Ok(FetchedAsset { content_type, upstream })
}
