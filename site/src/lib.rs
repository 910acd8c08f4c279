//! # site
//!
//! Leptos + WASM interaction layer for the Stellar portfolio page: theme
//! toggle, mobile navigation, smooth in-page scrolling, a gallery lightbox,
//! and a contact form with client-side validation and a simulated send.
//!
//! Interaction logic lives in `state` as plain transitions; components turn
//! DOM gestures into events and render the resulting state.

pub mod app;
pub mod components;
pub mod consts;
pub mod dispatch;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
