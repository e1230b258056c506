//! UI Components
//!
//! Leptos components for the editing and preview screens.

mod unit_selector;
mod entry_row;
mod grocery_table;
mod preview_panel;
mod toast_stack;
mod error_panel;

pub use unit_selector::UnitSelector;
pub use entry_row::EntryRow;
pub use grocery_table::GroceryTable;
pub use preview_panel::PreviewPanel;
pub use toast_stack::ToastStack;
pub use error_panel::ErrorPanel;
