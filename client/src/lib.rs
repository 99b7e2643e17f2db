//! # weekpick-client
//!
//! Leptos + WASM frontend for the weekly availability picker.
//!
//! Users pick a display timezone, step between calendar weeks, tick half-hour
//! slots per weekday, and download the selection as `my-file.json`. All state
//! is local to the page; the server only renders and serves the bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
