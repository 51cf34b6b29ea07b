//! # client
//!
//! Leptos CSR frontend for a single-page personal portfolio. Each content
//! section reads its own subtree from a remote JSON document store on mount
//! and renders it with decorative motion (tilt, parallax, drag-scroll
//! carousel, hover words).
//!
//! Browser-only code sits behind the `csr` feature; everything else builds
//! and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("portfolio client starting");
    leptos::mount::mount_to_body(app::App);
}
