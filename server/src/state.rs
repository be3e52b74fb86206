//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! relay is stateless per request, so the state is just the outbound HTTP
//! client (connection pool) and the startup configuration.

use std::sync::Arc;

use crate::config::RelayConfig;

/// Clone is required by Axum; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    /// Build the outbound client with the configured timeouts. Unset
    /// timeouts keep the transport defaults.
    ///
    /// # Errors
    ///
    /// Returns the client builder error (e.g. TLS backend initialization).
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let http = client_builder(&config).build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}

pub(crate) fn client_builder(config: &RelayConfig) -> reqwest::ClientBuilder {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    builder
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
