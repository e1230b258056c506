//! Unit Selector Component
//!
//! Dropdown of the configured unit choices.

use leptos::prelude::*;

/// Unit dropdown for a list entry
#[component]
pub fn UnitSelector(
    choices: Vec<String>,
    #[prop(into)] current: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="unit-select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {choices.into_iter().map(|unit| {
                let label = unit.clone();
                let is_selected = {
                    let unit = unit.clone();
                    move || current.get() == unit
                };
                view! {
                    <option value=unit selected=is_selected>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
