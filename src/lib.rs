//! # newsroom-dashboard
//!
//! Leptos + WASM administrative dashboard for a news-publishing platform.
//! Administrators manage writers and categories and approve content; writers
//! author and edit articles.
//!
//! The crate is organized around the role-based session: a bearer token is
//! decoded into typed claims (`state::claims`), held in a context-provided
//! store (`state::session`), and consulted by route guards (`util::auth`,
//! `components::route_guard`) and the sidebar navigation model (`util::nav`).
//! Pages talk to the remote REST API through typed request builders in `net`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    let config = config::AppConfig::from_build_env();
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("newsroom dashboard starting; api={}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
