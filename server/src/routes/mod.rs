//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the backend relay, the asset relay and a health check,
//! and stitches them with Leptos SSR rendering under a single Axum router.

pub mod proxy;
pub mod uploads;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::relay::{RELAY_ALLOW_HEADERS, RELAY_ALLOW_METHODS, RELAY_ALLOW_ORIGIN};
use crate::state::AppState;

/// Relay and health routes, usable without the Leptos site.
pub fn api_routes(state: AppState) -> Router {
    let max_body = state.config.max_body_bytes;

    // Every relay response, including errors and preflight, carries these.
    let relay = Router::new()
        .route(
            "/api/proxy/{*path}",
            get(proxy::relay)
                .post(proxy::relay)
                .put(proxy::relay)
                .patch(proxy::relay)
                .delete(proxy::relay)
                .options(proxy::relay),
        )
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(RELAY_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(RELAY_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(RELAY_ALLOW_HEADERS),
        ))
        .layer(DefaultBodyLimit::max(max_body));

    Router::new()
        .merge(relay)
        .route("/api/uploads/{*path}", get(uploads::fetch))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Leptos SSR frontend: relay routes + Leptos SSR + `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
