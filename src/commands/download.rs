//! Download Commands
//!
//! Saves text through a temporary object URL and anchor.

use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::{js_error, window};

/// Trigger a browser save dialog for `text`. Failures are logged only.
pub fn download_text(file_name: &str, text: &str) {
    if let Err(e) = try_download(file_name, text) {
        log::error!("[EXPORT] Download of {} failed: {}", file_name, e);
    }
}

fn try_download(file_name: &str, text: &str) -> Result<(), String> {
    let document = window()?
        .document()
        .ok_or_else(|| "no document".to_string())?;
    let body = document.body().ok_or_else(|| "no body".to_string())?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;

    Url::revoke_object_url(&url).map_err(js_error)
}
