//! # friendgift-client
//!
//! Leptos + WASM frontend for the FriendGift gift-ideas tracker.
//!
//! A user signs in, manages a list of friends, and records free-text gift
//! ideas per friend. All persistence lives behind the FriendGift REST API;
//! this crate contains the pages, shared components, client-side state
//! (including the session token), and the HTTP client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
