//! Grocery Table Component
//!
//! Editing screen: filter, bulk selection, one row per catalog item.

use leptos::prelude::*;

use crate::components::EntryRow;
use crate::context::use_app_context;
use crate::entries::{filter_items, selected_count};
use crate::models::NoticeKind;
use crate::store::{store_open_preview, store_set_selected_many, use_app_store, AppStateStoreFields};

#[component]
pub fn GroceryTable() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let choices = store.catalog().with_untracked(|c| c.unit_choices());
    let other_unit = store.catalog().with_untracked(|c| c.settings.other_unit.clone());

    let visible = Memo::new(move |_| {
        let filter = store.filter().get();
        store.catalog().with(|c| filter_items(&c.items, &filter))
    });

    let counter = move || {
        let total = store.catalog().with(|c| c.items.len());
        let selected = store.entries().with(|list| selected_count(list));
        format!("{} of {} selected", selected, total)
    };

    let set_visible = move |selected: bool| {
        let ids: Vec<u32> = visible.get_untracked().iter().map(|i| i.id).collect();
        store_set_selected_many(&store, &ids, selected);
    };

    let open_preview = move |_| {
        if let Err(e) = store_open_preview(&store) {
            ctx.notify(NoticeKind::Warning, e.to_string());
        }
    };

    view! {
        <section class="grocery-editor">
            <div class="toolbar">
                <input
                    type="search"
                    class="filter-input"
                    placeholder="Filter items..."
                    prop:value=move || store.filter().get()
                    on:input=move |ev| store.filter().set(event_target_value(&ev))
                />
                <button type="button" on:click=move |_| set_visible(true)>"Select all"</button>
                <button type="button" on:click=move |_| set_visible(false)>"Clear all"</button>
            </div>

            <table class="grocery-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Item"</th>
                        <th>"Quantity"</th>
                        <th>"Unit"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|item| item.id
                        children=move |item| {
                            view! {
                                <EntryRow
                                    item=item
                                    choices=choices.clone()
                                    other_unit=other_unit.clone()
                                />
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || visible.with(|v| v.is_empty())>
                <p class="empty-filter">"No items match the filter."</p>
            </Show>

            <div class="editor-footer">
                <span class="selection-count">{counter}</span>
                <button type="button" class="primary-btn" on:click=open_preview>"Preview"</button>
            </div>
        </section>
    }
}
