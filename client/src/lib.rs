//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page sections, the static content tables, the
//! theme store, and the contact form state machine. It is compiled with the
//! `ssr` feature into the server and with `hydrate` into the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
