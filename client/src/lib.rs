//! # client
//!
//! Leptos + WASM frontend for EyeOnDesk desk-occupancy monitoring.
//!
//! This crate contains pages, components, application state, REST/SSE
//! helpers, and the coordinate math behind the detection-rectangle editor.
//! The same crate is compiled twice: with `ssr` for the Axum host and with
//! `hydrate` for the browser bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::log_level()).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    leptos::mount::hydrate_body(app::App);
}
