//! Preview Panel Component
//!
//! Read-only export text with the three exporters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::export::{export_file_name, format_export, share_url, today};
use crate::models::NoticeKind;
use crate::store::{store_back_to_editing, use_app_store, AppStateStoreFields};

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let text = Memo::new(move |_| {
        let entries = store.entries().get();
        store.catalog().with(|c| format_export(c, &entries, today()))
    });

    let copy = move |_| {
        let text = text.get_untracked();
        spawn_local(async move {
            match commands::copy_text(&text).await {
                Ok(()) => {
                    log::info!("[EXPORT] Copied {} bytes to clipboard", text.len());
                    ctx.notify(NoticeKind::Success, "Copied to clipboard");
                }
                Err(e) => {
                    log::warn!("[EXPORT] {}", e);
                    ctx.notify(NoticeKind::Error, format!("Copy failed: {}", e));
                }
            }
        });
    };

    let download = move |_| {
        let name = export_file_name(today());
        commands::download_text(&name, &text.get_untracked());
        log::info!("[EXPORT] Downloaded {}", name);
        ctx.notify(NoticeKind::Success, format!("Saved {}", name));
    };

    let send = move |_| {
        let url = store.catalog().with_untracked(|c| {
            share_url(&c.settings.messaging_url, &c.user.shopkeeper_mobile, &text.get_untracked())
        });
        commands::open_link(&url);
        ctx.notify(NoticeKind::Info, "Opening messaging app...");
    };

    view! {
        <section class="grocery-preview">
            <pre class="preview-text">{move || text.get()}</pre>
            <div class="preview-actions">
                <button type="button" on:click=move |_| store_back_to_editing(&store)>"Back"</button>
                <button type="button" on:click=copy>"Copy"</button>
                <button type="button" on:click=download>"Download"</button>
                <button type="button" class="primary-btn" on:click=send>"Send"</button>
            </div>
        </section>
    }
}
