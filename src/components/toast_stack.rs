//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Transient notices, click to dismiss
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.notices.with(|q| q.notices().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.css_class() on:click=move |_| ctx.dismiss(id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
