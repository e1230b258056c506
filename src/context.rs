//! Application Context
//!
//! Shared notice signals provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::NoticeKind;
use crate::notice::NoticeQueue;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Visible notices - read
    pub notices: ReadSignal<NoticeQueue>,
    /// Visible notices - write
    set_notices: WriteSignal<NoticeQueue>,
    /// Notice lifetime in milliseconds
    toast_millis: ReadSignal<u32>,
    set_toast_millis: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        notices: (ReadSignal<NoticeQueue>, WriteSignal<NoticeQueue>),
        toast_millis: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            notices: notices.0,
            set_notices: notices.1,
            toast_millis: toast_millis.0,
            set_toast_millis: toast_millis.1,
        }
    }

    /// Show a notice and schedule its removal
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let text = text.into();
        log::debug!("[VIEW] Notice {:?}: {}", kind, text);

        let mut id = 0;
        self.set_notices.update(|queue| id = queue.push(kind, text));

        let set_notices = self.set_notices;
        let millis = self.toast_millis.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            set_notices.update(|queue| queue.dismiss(id));
        });
    }

    /// Remove a notice before its timer fires
    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|queue| queue.dismiss(id));
    }

    pub fn set_toast_millis(&self, millis: u32) {
        self.set_toast_millis.set(millis);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
