//! PrivacyMail web shell.
//!
//! This crate provides the Leptos application (header, routed pages, footer)
//! and, behind the `ssr` feature, the axum host that serves it.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod dom;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
