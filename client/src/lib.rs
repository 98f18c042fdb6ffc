//! # client
//!
//! Leptos + WASM frontend for FinVault, a personal-finance dashboard with a
//! combined sign-in / sign-up flow.
//!
//! The crate holds the auth form state machine and its submission
//! controller, the validation schema (shared with the host), the dashboard
//! model, the browser HTTP adapters, and the pages and components that
//! render them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
