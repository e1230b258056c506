//! Browser Command Wrappers
//!
//! Thin async bindings to browser facilities, organized by concern.
//! `JsValue` failures are turned into strings here.

mod config;
mod clipboard;
mod download;
mod share;

use wasm_bindgen::prelude::*;

// Re-export all public items
pub use config::*;
pub use clipboard::*;
pub use download::*;
pub use share::*;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no global window".to_string())
}

/// Readable text of a thrown JS value
fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
