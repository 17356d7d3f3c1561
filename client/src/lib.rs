//! # client
//!
//! Leptos + WASM front-end for submitting tau/delta parameters.
//!
//! This crate contains the page shell, the `TauDeltaForm` component, the
//! browser HTTP adapter, and the settings hand-off between the SSR host and
//! the hydrated page. Form state and validation live in the `form` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod settings;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
