//! Client-safe error codes.
//!
//! Failures are logged in full with `tracing` where they happen; only the
//! status, a fixed message and a grepable code reach the browser.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn status(&self) -> StatusCode;

    /// Message safe to show to the caller. Never contains upstream detail.
    fn client_message(&self) -> &'static str;
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    code: &'static str,
}

/// `{"error": <message>, "code": <E_*>}` with the error's status.
pub fn json_error<E: ErrorCode>(err: &E) -> Response {
    let body = ErrorBody { error: err.client_message(), code: err.error_code() };
    (err.status(), Json(body)).into_response()
}
