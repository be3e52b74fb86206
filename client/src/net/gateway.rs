//! Request gateway for every outbound backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! All REST traffic goes through [`Gateway`]. Requests are decorated in one
//! place: the bearer token is read from durable storage on every call (not
//! from the in-memory session) and attached when present. Responses are
//! inspected in one place: a 401 clears the durable session and forces a
//! full navigation to `/login`. There is no retry and no token refresh.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `send` returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Pages that fan out several fetches wrap each one in [`or_default`] so a
//! single failure degrades to empty data instead of failing the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::de::DeserializeOwned;

use super::config::api_base;
use crate::util::storage::{self, DurableStore, LocalStorage};

pub const LOGIN_PATH: &str = "/login";

// =============================================================================
// ERROR
// =============================================================================

/// Failures surfaced by [`Gateway::send`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401; the session has already been cleared.
    #[error("unauthorized")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String>, details: Vec<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is only performed in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for an inline form error.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized => "Invalid email or password. Please check your credentials and try again.".to_owned(),
            Self::Status { status: 409, .. } => {
                "An account with this email already exists. Please use a different email or try logging in."
                    .to_owned()
            }
            Self::Status { status: 400, message, details } => {
                if details.is_empty() {
                    message
                        .clone()
                        .unwrap_or_else(|| "Invalid information provided. Please check your details and try again.".to_owned())
                } else {
                    details.join(", ")
                }
            }
            Self::Status { status, .. } if *status >= 500 => {
                "Server is temporarily unavailable. Please try again in a few moments.".to_owned()
            }
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Network(msg) if msg.to_ascii_lowercase().contains("timeout") => {
                "Request timed out. Please try again.".to_owned()
            }
            Self::Network(_) => {
                "Unable to connect to server. Please check your internet connection and try again.".to_owned()
            }
            Self::Status { .. } | Self::Decode(_) | Self::Unavailable => fallback.to_owned(),
        }
    }
}

/// Build an [`ApiError::Status`] from a non-success body such as
/// `{"error": "...", "details": ["..."]}`.
#[must_use]
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|v| {
        v.get("error")
            .or_else(|| v.get("message"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    });
    let details = parsed
        .as_ref()
        .and_then(|v| v.get("details"))
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();
    ApiError::Status { status, message, details }
}

/// Decode a success body. An empty body decodes as JSON `null`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not match `T`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let raw = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Substitute `T::default()` for a failed fetch, logging the failure.
pub fn or_default<T: Default>(label: &str, result: Result<T, ApiError>) -> T {
    result.unwrap_or_else(|err| {
        log::warn!("{label} request failed: {err}");
        T::default()
    })
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    #[cfg(feature = "hydrate")]
    fn to_gloo(self) -> gloo_net::http::Method {
        match self {
            Self::Get => gloo_net::http::Method::GET,
            Self::Post => gloo_net::http::Method::POST,
            Self::Put => gloo_net::http::Method::PUT,
            Self::Patch => gloo_net::http::Method::PATCH,
            Self::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

/// A backend call relative to the API base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::Patch, path).with_body(body)
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Append `key=value` only when `value` is set.
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }
}

/// A fully decorated request ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Full-page navigation, used when the session is revoked.
pub trait Navigator {
    fn hard_redirect(&self, path: &str);
}

/// `window.location.href = path`. A no-op outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

// =============================================================================
// GATEWAY
// =============================================================================

/// HTTP client bound to an API base, a token store and a navigator.
#[derive(Clone, Debug)]
pub struct Gateway<S, N> {
    base_url: String,
    store: S,
    navigator: N,
}

/// The gateway the app provides through context.
pub type BrowserGateway = Gateway<LocalStorage, LocationNavigator>;

impl BrowserGateway {
    #[must_use]
    pub fn browser() -> Self {
        Self::new(api_base(), LocalStorage, LocationNavigator)
    }
}

impl<S: DurableStore, N: Navigator> Gateway<S, N> {
    pub fn new(base_url: impl Into<String>, store: S, navigator: N) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, store, navigator }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Absolute URL for `request`, including the encoded query string.
    #[must_use]
    pub fn url_for(&self, request: &ApiRequest) -> String {
        let path = request.path.trim_start_matches('/');
        let mut url = format!("{}/{path}", self.base_url);
        if !request.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(request.query.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Decorate `request` with the JSON content type and, if a token is
    /// persisted, the bearer authorization header.
    #[must_use]
    pub fn prepare(&self, request: &ApiRequest) -> PreparedRequest {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(token) = storage::load_token(&self.store) {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        PreparedRequest {
            method: request.method,
            url: self.url_for(request),
            headers,
            body: request.body.as_ref().map(serde_json::Value::to_string),
        }
    }

    /// React to a response status before its body is read.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for 401, after clearing the durable
    /// session and redirecting to `/login`.
    pub fn inspect(&self, status: u16) -> Result<(), ApiError> {
        if status == 401 {
            log::warn!("backend rejected credentials; clearing session");
            storage::clear_session(&self.store);
            self.navigator.hard_redirect(LOGIN_PATH);
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }

    /// Send `request` and decode a JSON success body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-success statuses,
    /// or bodies that do not decode as `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let prepared = self.prepare(&request);
            let mut builder = gloo_net::http::RequestBuilder::new(&prepared.url).method(prepared.method.to_gloo());
            for (name, value) in &prepared.headers {
                builder = builder.header(name, value);
            }
            let outbound = match prepared.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = outbound
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            self.inspect(status)?;

            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            if !resp.ok() {
                return Err(error_from_body(status, &text));
            }
            decode_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
