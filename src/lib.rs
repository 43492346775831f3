//! # portal-client
//!
//! Leptos + WASM view layer for the stock portal front end.
//!
//! This crate contains the page shell, the static footer, the dashboard view
//! that fetches the protected resource on mount, and the authenticated HTTP
//! client it is handed. The `server/` crate hosts it for SSR + hydration.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
