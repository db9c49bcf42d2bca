//! # gallery-client
//!
//! Leptos + WASM frontend for the picture gallery application.
//!
//! This crate contains pages, components, shared client state, the network
//! layer, and the navigation guard that gates the admin area behind a
//! session fetched from the backend on first load.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;

/// Browser entry point — mounts the application and wires up logging.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
