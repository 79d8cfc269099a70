//! # trackboard
//!
//! Leptos + WASM frontend for the experiment tracking application. Renders
//! a paginated experiments table whose rows expand into per-run metric and
//! parameter details, backed by the tracking server's REST API.
//!
//! This crate contains the application shell, pages, components, shared
//! state, and the network layer that keeps the list state in sync with the
//! server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
