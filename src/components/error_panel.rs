//! Error Panel Component
//!
//! Blocking panel shown when the configuration cannot be loaded.

use leptos::prelude::*;

use crate::config::CONFIG_PATH;

#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h2>"Could not load the grocery catalog"</h2>
            <p class="error-message">{message}</p>
            <p class="error-hint">
                "Check that " <code>{CONFIG_PATH}</code> " is served and valid, then reload the page."
            </p>
        </div>
    }
}
