//! # client
//!
//! Leptos + WASM frontend for the campus landing site.
//!
//! This crate contains the landing widgets (promo cards, logo carousel), the
//! role-aware mobile sidebar, shared session state, and the browser glue they
//! rely on. The `ssr` feature exposes `app::shell` to the Axum host; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating campus client");
    leptos::mount::hydrate_body(app::App);
}
