//! Clipboard Commands
//!
//! Frontend wrapper for `navigator.clipboard.writeText`.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{js_error, window};
use crate::error::ExportError;

/// Write text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), ExportError> {
    let navigator = window()
        .map_err(|_| ExportError::ClipboardUnavailable)?
        .navigator();

    // Missing outside secure contexts, so look it up instead of binding it
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ExportError::ClipboardUnavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ExportError::ClipboardUnavailable);
    }

    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into().ok())
        .ok_or(ExportError::ClipboardUnavailable)?;

    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ExportError::ClipboardRejected(js_error(e)))?
        .dyn_into()
        .map_err(|e| ExportError::ClipboardRejected(js_error(e)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ExportError::ClipboardRejected(js_error(e)))
}
