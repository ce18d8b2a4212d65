//! # doctor-portal
//!
//! Leptos + WASM frontend for the doctor login and sign-up screens of the
//! appointment platform.
//!
//! This crate contains pages, application state, the submission flows behind
//! each form, and the REST client for the backend API. Browser concerns
//! (HTTP, `localStorage`, navigation) sit behind small traits so the flows can
//! run against in-memory doubles in tests.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
