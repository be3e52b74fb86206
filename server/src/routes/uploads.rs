//! `GET /api/uploads/{*path}` handler.

#[cfg(test)]
#[path = "uploads_test.rs"]
mod tests;

use axum::body::Body;
use axum::extract::State;
use axum::http::Uri;
use axum::http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use crate::error::ErrorCode;
use crate::services::assets::{self, ASSET_ALLOW_METHODS, ASSET_CACHE_CONTROL, ASSET_PREFIX};
use crate::state::AppState;

/// The file path is taken from the raw URI so encoded `#` and `?` stay part
/// of the file name.
pub async fn fetch(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path().strip_prefix(ASSET_PREFIX).unwrap_or_default();
    match assets::fetch(&state, path).await {
        Ok(asset) => (
            [
                (CONTENT_TYPE, asset.content_type),
                (CACHE_CONTROL, ASSET_CACHE_CONTROL.to_string()),
                (ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
                (ACCESS_CONTROL_ALLOW_METHODS, ASSET_ALLOW_METHODS.to_string()),
            ],
            Body::from_stream(asset.upstream.bytes_stream()),
        )
            .into_response(),
        Err(e) => (e.status(), e.client_message()).into_response(),
    }
}
