//! Entry Row Component
//!
//! One catalog item in the editing table.

use leptos::prelude::*;

use crate::components::UnitSelector;
use crate::models::CatalogItem;
use crate::store::{
    store_find_entry, store_set_quantity, store_set_unit, store_toggle_selected, use_app_store,
};

/// A single editable row
#[component]
pub fn EntryRow(
    item: CatalogItem,
    choices: Vec<String>,
    other_unit: Option<String>,
) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    let entry = Memo::new(move |_| store_find_entry(&store, id));
    let selected = move || entry.get().map(|e| e.selected).unwrap_or(false);
    let unit = Signal::derive(move || entry.get().map(|e| e.unit).unwrap_or_default());
    let quantity = move || entry.get().map(|e| e.quantity).unwrap_or_default();

    let placeholder = move || {
        if other_unit.as_deref() == Some(unit.get().as_str()) {
            "e.g. 1 bottle, Rs 50"
        } else {
            "Qty"
        }
    };

    view! {
        <tr class=move || if selected() { "entry-row selected" } else { "entry-row" }>
            <td>
                <input
                    type="checkbox"
                    prop:checked=selected
                    on:change=move |_| {
                        if let Err(e) = store_toggle_selected(&store, id) {
                            log::warn!("[EDIT] {}", e);
                        }
                    }
                />
            </td>
            <td class="entry-name">{item.name.clone()}</td>
            <td>
                <input
                    type="text"
                    class="quantity-input"
                    placeholder=placeholder
                    prop:value=quantity
                    on:input=move |ev| {
                        if let Err(e) = store_set_quantity(&store, id, &event_target_value(&ev)) {
                            log::warn!("[EDIT] {}", e);
                        }
                    }
                />
            </td>
            <td>
                <UnitSelector
                    choices=choices
                    current=unit
                    on_change=move |new_unit: String| {
                        if let Err(e) = store_set_unit(&store, id, &new_unit) {
                            log::warn!("[EDIT] {}", e);
                        }
                    }
                />
            </td>
        </tr>
    }
}
