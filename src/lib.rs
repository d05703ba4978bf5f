//! Authdeck - auth-gated dashboard
//!
//! A Leptos application that signs users in against an external auth service
//! and shows their account once a session exists.

#![recursion_limit = "1024"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
