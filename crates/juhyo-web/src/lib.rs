//! Juhyo browser binding
//!
//! Implements the core [`Dom`](juhyo_core::Dom) seam over `web_sys`,
//! forwards window and document events to [`Page`](juhyo_core::Page) and
//! applies what it asks for: `preventDefault`, intersection bookkeeping
//! and animation frames.
//!
//! The page configuration is read from
//! `<script type="application/json" id="page-config">`.

pub mod logging;

#[cfg(target_arch = "wasm32")]
mod runtime;
#[cfg(target_arch = "wasm32")]
pub mod web_dom;

#[cfg(target_arch = "wasm32")]
pub use web_dom::WebDom;

/// Module entry point, run by the wasm-bindgen glue on load
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);
    runtime::boot_when_ready();
}
