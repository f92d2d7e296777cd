//! # folio
//!
//! Leptos + WASM frontend for a personal portfolio site: hero, skills,
//! project carousel, certificate strip, contact form, about page and blog.
//!
//! This crate contains pages, components, the UI state machines behind them,
//! the static site content, and the wire types shared with `folio-server`.
//! Built with `hydrate` for the browser bundle and `ssr` for server rendering.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
