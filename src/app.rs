//! Grocery List App
//!
//! Root component: loads the catalog, then switches between screens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ErrorPanel, GroceryTable, PreviewPanel, ToastStack};
use crate::config::{log_level, CONFIG_PATH};
use crate::context::AppContext;
use crate::notice::NoticeQueue;
use crate::store::{store_fail_loading, store_load_catalog, AppState, AppStateStoreFields};
use crate::view_state::ViewState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(signal(NoticeQueue::default()), signal(3000u32));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the catalog once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::load_catalog(CONFIG_PATH).await {
                Ok(catalog) => {
                    log::set_max_level(log_level(&catalog.settings.log_level));
                    log::info!(
                        "[CONFIG] Loaded {} items, {} units",
                        catalog.items.len(),
                        catalog.units.len()
                    );
                    ctx.set_toast_millis(catalog.settings.toast_millis);
                    store_load_catalog(&store, catalog);
                }
                Err(e) => {
                    log::error!("[CONFIG] {}", e);
                    store_fail_loading(&store, &e);
                }
            }
        });
    });

    let title = move || {
        let title = store.catalog().with(|c| c.settings.title.clone());
        if title.is_empty() {
            "Grocery List".to_string()
        } else {
            title
        }
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>{title}</h1>

                {move || match store.view().get() {
                    ViewState::Loading => view! {
                        <p class="loading">"Loading catalog..."</p>
                    }.into_any(),
                    ViewState::ConfigurationError(message) => view! {
                        <ErrorPanel message=message />
                    }.into_any(),
                    ViewState::Editing => view! { <GroceryTable /> }.into_any(),
                    ViewState::Preview => view! { <PreviewPanel /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}
