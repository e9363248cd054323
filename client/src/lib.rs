//! Fresh Bowl browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled twice: as the WASM hydration bundle (`hydrate`) and as a regular
//! library the server renders from (`ssr`). Both sides share one `App`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
