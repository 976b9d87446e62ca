//! # client
//!
//! Leptos frontend for the interviewer console. Rendered on the server
//! (`ssr`) and hydrated in the browser (`hydrate`).
//!
//! The crate contains the provider components (session, notifications,
//! error containment), the protected-route guard, pages, client state, and
//! the REST helpers that talk to the `server` crate's `/api` routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Installs panic and log hooks, then hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
