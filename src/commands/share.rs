//! Share Commands
//!
//! Opens the prefilled messaging link.

use super::window;

/// Open `url` in a new browsing context. Failures are logged only.
pub fn open_link(url: &str) {
    match window().and_then(|w| {
        w.open_with_url_and_target(url, "_blank")
            .map_err(super::js_error)
    }) {
        Ok(Some(_)) => log::debug!("[EXPORT] Opened messaging link"),
        Ok(None) => log::warn!("[EXPORT] Messaging link was blocked by the browser"),
        Err(e) => log::error!("[EXPORT] Could not open messaging link: {}", e),
    }
}
