//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::entries;
use crate::error::{ConfigError, EditError};
use crate::models::{Catalog, ListEntry};
use crate::view_state::ViewState;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current screen
    pub view: ViewState,
    /// Loaded configuration (empty until loaded)
    pub catalog: Catalog,
    /// One entry per catalog item, in catalog order
    pub entries: Vec<ListEntry>,
    /// Row filter text for the editing table
    pub filter: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install a freshly loaded catalog and leave the loading screen
pub fn store_load_catalog(store: &AppStore, catalog: Catalog) {
    store.entries().set(entries::init_entries(&catalog));
    store.catalog().set(catalog);
    store.view().update(|view| *view = view.loaded());
}

pub fn store_fail_loading(store: &AppStore, error: &ConfigError) {
    store.view().update(|view| *view = view.failed(error.to_string()));
}

pub fn store_toggle_selected(store: &AppStore, id: u32) -> Result<bool, EditError> {
    entries::toggle_selected(&mut store.entries().write(), id)
}

pub fn store_set_unit(store: &AppStore, id: u32, unit: &str) -> Result<(), EditError> {
    let choices = store.catalog().with_untracked(|c| c.unit_choices());
    entries::set_unit(&mut store.entries().write(), id, unit, &choices)
}

pub fn store_set_quantity(store: &AppStore, id: u32, quantity: &str) -> Result<(), EditError> {
    entries::set_quantity(&mut store.entries().write(), id, quantity)
}

/// Select or clear every id in `ids`
pub fn store_set_selected_many(store: &AppStore, ids: &[u32], selected: bool) {
    entries::set_selected_many(&mut store.entries().write(), ids, selected);
}

/// Find an entry by ID (tracked)
pub fn store_find_entry(store: &AppStore, id: u32) -> Option<ListEntry> {
    store.entries().with(|list| list.iter().find(|e| e.id == id).cloned())
}

/// Try Editing -> Preview
pub fn store_open_preview(store: &AppStore) -> Result<(), EditError> {
    let current = store.view().get_untracked();
    let next = store.entries().with_untracked(|list| current.preview(list))?;
    store.view().set(next);
    Ok(())
}

/// Preview -> Editing
pub fn store_back_to_editing(store: &AppStore) {
    store.view().update(|view| *view = view.edit());
}
