//! # storefront
//!
//! Leptos + WASM storefront and admin console for the sweet shop catalog.
//!
//! This crate contains pages, components, the client-side session store,
//! the route guard, and the HTTP adapter for the remote shop API. The
//! `server` crate renders it with SSR and serves the hydrate bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
