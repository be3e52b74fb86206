//! Backend relay: forward a browser request to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/api/proxy/<path>` on this server to avoid cross-origin
//! restrictions. Each request is forwarded to `{backend}/<path>?<query>`
//! with the caller's `Authorization` header, and the backend's status and
//! body come back unchanged. The relay is stateless and never retries.
//!
//! DESIGN
//! ======
//! Body policy: GET and DELETE carry no body. Multipart bodies keep the
//! inbound content type (boundary included) and bytes. Everything else is
//! forwarded as raw bytes labelled `application/json`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are classified (connect, timeout, other) and reported
//! with a fixed message. The underlying error is logged, never returned.

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;

use axum::body::Bytes;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use reqwest::Url;
use tracing::{error, info};

use super::rewrite_loopback;
use crate::config::RelayConfig;
use crate::error::{ErrorCode, json_error};
use crate::state::AppState;

pub const RELAY_PREFIX: &str = "/api/proxy/";
pub const RELAY_ALLOW_ORIGIN: &str = "*";
pub const RELAY_ALLOW_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";
pub const RELAY_ALLOW_HEADERS: &str = "Content-Type, Authorization";

const JSON_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid relay target {0}")]
    InvalidTarget(String),
    #[error("backend unreachable: {0}")]
    Unavailable(String),
    #[error("backend timed out: {0}")]
    Timeout(String),
    #[error("relay request failed: {0}")]
    Failed(String),
}

impl RelayError {
    /// Timeout is checked first: a connect timeout is both.
    #[must_use]
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Unavailable(err.to_string())
        } else {
            Self::Failed(err.to_string())
        }
    }
}

impl ErrorCode for RelayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) => "E_INVALID_TARGET",
            Self::Unavailable(_) => "E_BACKEND_UNAVAILABLE",
            Self::Timeout(_) => "E_BACKEND_TIMEOUT",
            Self::Failed(_) => "E_RELAY_FAILED",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidTarget(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) => "Invalid proxy path",
            Self::Unavailable(_) => "Backend service unavailable",
            Self::Timeout(_) => "Backend request timed out",
            Self::Failed(_) => "Proxy request failed",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        json_error(&self)
    }
}

/// The parts of an inbound request the relay forwards.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Path below the relay prefix, still percent-encoded.
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<HeaderValue>,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundBody {
    None,
    Json(Bytes),
    Multipart { content_type: HeaderValue, bytes: Bytes },
}

impl OutboundBody {
    #[must_use]
    pub fn classify(method: &Method, content_type: Option<&HeaderValue>, body: Bytes) -> Self {
        if *method == Method::GET || *method == Method::DELETE {
            return Self::None;
        }
        match content_type {
            Some(ct) if is_multipart(ct) => Self::Multipart { content_type: ct.clone(), bytes: body },
            _ => Self::Json(body),
        }
    }

    #[must_use]
    pub fn content_type(&self) -> HeaderValue {
        match self {
            Self::Multipart { content_type, .. } => content_type.clone(),
            Self::None | Self::Json(_) => HeaderValue::from_static(JSON_CONTENT_TYPE),
        }
    }
}

fn is_multipart(content_type: &HeaderValue) -> bool {
    content_type
        .to_str()
        .map_or(false, |ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelayBody {
    Json(serde_json::Value),
    Text(String),
}

/// Backend answer, relayed with its original status.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status: StatusCode,
    /// Upstream content type, kept for text bodies.
    pub content_type: Option<String>,
    pub body: RelayBody,
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        match self.body {
            RelayBody::Json(value) => (self.status, axum::Json(value)).into_response(),
            RelayBody::Text(text) => {
                let content_type = self
                    .content_type
                    .unwrap_or_else(|| "text/plain; charset=utf-8".to_string());
                (self.status, [(CONTENT_TYPE, content_type)], text).into_response()
            }
        }
    }
}

// =============================================================================
// FORWARDING
// =============================================================================

/// `{backend}/{path}?{query}`, with the loopback rewrite applied if enabled.
///
/// # Errors
///
/// Returns [`RelayError::InvalidTarget`] if the joined URL does not parse.
pub fn target_url(config: &RelayConfig, path: &str, query: Option<&str>) -> Result<Url, RelayError> {
    let raw = format!("{}/{}", config.backend_url, path.trim_start_matches('/'));
    let mut url = Url::parse(&raw).map_err(|e| RelayError::InvalidTarget(format!("{raw}: {e}")))?;
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.set_query(Some(query));
    }
    if config.rewrite_localhost {
        rewrite_loopback(&mut url);
    }
    Ok(url)
}

/// Decode as JSON when the backend says so; otherwise, or if parsing
/// fails, pass the body through as text.
#[must_use]
pub fn decode_response(content_type: Option<&str>, bytes: &[u8]) -> RelayBody {
    let is_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains(JSON_CONTENT_TYPE));
    if is_json {
        if let Ok(value) = serde_json::from_slice(bytes) {
            return RelayBody::Json(value);
        }
    }
    RelayBody::Text(String::from_utf8_lossy(bytes).into_owned())
}

/// Forward `inbound` to the backend and collect its answer.
///
/// # Errors
///
/// Returns a [`RelayError`] for an unusable target or a transport failure.
/// A non-success backend status is not an error; it is relayed as-is.
pub async fn forward(state: &AppState, inbound: InboundRequest) -> Result<RelayResponse, RelayError> {
    let url = target_url(&state.config, &inbound.path, inbound.query.as_deref())?;
    let body = OutboundBody::classify(&inbound.method, inbound.content_type.as_ref(), inbound.body);

    info!(method = %inbound.method, url = %url, "relaying request");

    let mut request = state
        .http
        .request(inbound.method.clone(), url.clone())
        .header(CONTENT_TYPE, body.content_type());
    if let Some(auth) = inbound.authorization {
        request = request.header(AUTHORIZATION, auth);
    }
    request = match body {
        OutboundBody::None => request,
        OutboundBody::Json(bytes) | OutboundBody::Multipart { bytes, .. } => request.body(bytes),
    };

    let response = request.send().await.map_err(|e| {
        let err = RelayError::from_transport(&e);
        error!(error = %e, code = err.error_code(), method = %inbound.method, url = %url, "relay request failed");
        err
    })?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes().await.map_err(|e| {
        let err = RelayError::from_transport(&e);
        error!(error = %e, code = err.error_code(), url = %url, "reading backend response failed");
        err
    })?;

    Ok(RelayResponse { status, body: decode_response(content_type.as_deref(), &bytes), content_type })
}
