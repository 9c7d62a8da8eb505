//! # pdf-tools-client
//!
//! Leptos + WASM frontend for the PDF tools site.
//!
//! This crate contains the page shell (header/footer fragments), the account
//! controls (login, password reset, logout, session restore), the tool search
//! box, and the upload pre-validation used by every conversion page. The
//! conversion backend and the auth API are external; this crate only talks to
//! them over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
