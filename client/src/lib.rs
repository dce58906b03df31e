//! # client
//!
//! Leptos + WASM frontend for the legal assistant: the assistant homepage
//! and chat threads, the review grid workspace with its chat panel, and the
//! vault project view.
//!
//! Pages and components render models from the `assistant` crate and drive
//! them with browser timers, animation frames and `sessionStorage`. Built
//! with `hydrate` for the browser bundle and `ssr` for the server renderer.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
