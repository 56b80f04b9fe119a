//! # client
//!
//! Leptos frontend for the Magna Galactica landing page.
//!
//! The `ssr` feature is consumed by the `server` crate to render the page;
//! the `hydrate` feature builds the WASM bundle that takes over in the
//! browser and runs the API status probe.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
