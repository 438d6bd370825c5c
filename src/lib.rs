//! # storefront
//!
//! Leptos + WASM storefront client: a fixed route table, one global
//! navigation guard that sends logged-out users to `/login`, and the pages
//! behind each route.
//!
//! The routing core (`routes`, `guard`, `util::location`) is plain Rust and
//! is tested natively; browser glue is compiled only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
