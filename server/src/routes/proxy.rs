//! `ANY /api/proxy/{*path}` handler.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ALLOW, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::services::relay::{self, InboundRequest, RELAY_ALLOW_METHODS, RELAY_PREFIX};
use crate::state::AppState;

/// Preflight requests are answered locally; the permissive headers come from
/// the router layer. The router only admits the relayed verbs, but it also
/// routes HEAD to the GET handler, so HEAD is refused here.
pub async fn relay(State(state): State<AppState>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if method == Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(ALLOW, RELAY_ALLOW_METHODS)]).into_response();
    }

    // The raw path keeps percent-encoding intact for the backend.
    let path = uri.path().strip_prefix(RELAY_PREFIX).unwrap_or_default().to_string();
    let inbound = InboundRequest {
        method,
        path,
        query: uri.query().map(str::to_string),
        authorization: headers.get(AUTHORIZATION).cloned(),
        content_type: headers.get(CONTENT_TYPE).cloned(),
        body,
    };

    match relay::forward(&state, inbound).await {
        Ok(response) => response.into_response(),
        Err(e) => e.into_response(),
    }
}
