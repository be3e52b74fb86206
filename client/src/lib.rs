//! # client
//!
//! Leptos + WASM frontend for the farm-to-retail supply-chain dashboard.
//!
//! This crate contains the session store, the request gateway that talks to
//! the REST backend (directly or through the server relay), the two-phase
//! route guard, and the farmer/retail dashboard pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
