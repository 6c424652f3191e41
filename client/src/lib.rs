//! # socialfeed-client
//!
//! Leptos front-end for the socialfeed mockup: a news feed, profiles and
//! the surrounding chrome, all behind a session-aware route guard.
//!
//! `state::session` holds the session state machine, `util::session` runs
//! it, and `access` decides per render whether a protected view may show.
//! Everything else is presentation over fixture data and the REST client in
//! `net::api`.

pub mod access;
pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
