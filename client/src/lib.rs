//! # client
//!
//! Leptos + WASM frontend for the fact board: a single feed page where
//! visitors browse facts by category, post new ones, and vote on them.
//!
//! This crate contains the page, its components, the feed and form state,
//! and the HTTP calls to the host's `/api/facts` endpoints. Domain types and
//! validation come from the `facts` crate so the server enforces the same
//! rules.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Attaches the client to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
