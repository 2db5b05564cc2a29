//! # fillflow-site
//!
//! Leptos + WASM front-end for the FillFlow marketing site.
//!
//! This crate contains the routed pages, shared layout components, the auth
//! session store, the blog loader, and the REST helpers used to talk to the
//! external auth API and the waitlist endpoint. The `server` crate renders it
//! with the `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
