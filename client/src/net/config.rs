//! API base URL selection.
//!
//! The browser either talks to the backend origin directly or routes every
//! call through the server relay at `/api/proxy`. Both knobs are read at
//! compile time, like any other public build-time setting of the WASM bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const RELAY_BASE: &str = "/api/proxy";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Pick the API base from the raw `PUBLIC_USE_PROXY` / `PUBLIC_API_URL` values.
#[must_use]
pub fn resolve_api_base(use_proxy: Option<&str>, api_url: Option<&str>) -> String {
    if use_proxy.is_some_and(|raw| raw.trim().eq_ignore_ascii_case("true")) {
        return RELAY_BASE.to_owned();
    }
    api_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}

/// API base compiled into this build.
#[must_use]
pub fn api_base() -> String {
    resolve_api_base(option_env!("PUBLIC_USE_PROXY"), option_env!("PUBLIC_API_URL"))
}
