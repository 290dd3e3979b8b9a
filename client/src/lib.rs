//! # client
//!
//! Leptos frontend for the Book My Chef marketplace. Renders on the server
//! under the `ssr` feature and hydrates in the browser under `hydrate`.
//!
//! Pages read the shared [`market::Catalog`] from context and keep all
//! edits (cancellations, booking actions, availability, profile changes) in
//! session signals.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Logging is best-effort in the browser.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
