//! # portal-client
//!
//! Leptos + WASM frontend for the portal's authenticated section.
//!
//! The crate's core is the session gate: a layout component that asks the
//! auth backend once whether the visitor is signed in and publishes the
//! answer to every view beneath it. Pages, the analytics widget, and the
//! HTTP auth backend are built around it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
