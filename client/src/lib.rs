//! # client
//!
//! Leptos + WASM frontend for the school portal's account and messaging
//! forms: password recovery, password reset, and teacher notifications.
//!
//! Form rules live in `state` as plain data so they can be tested natively;
//! `pages` bind them to signals, and `net` talks to the backend through the
//! portal host's `/api` proxy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Errs only when a logger is already installed; that logger stays active.
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(app::App);
}
