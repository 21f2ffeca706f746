//! # client
//!
//! Leptos + WASM frontend for the batch voice changer. Talks to the local
//! conversion server over a single WebSocket, brokering named get/set
//! requests and reacting to server-pushed conversion results.
//!
//! Browser-only code is gated behind the `csr` feature so the crate builds
//! and tests natively without a WASM toolchain.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
