//! Notice Queue
//!
//! Bookkeeping for transient toasts. Timers live in `AppContext`.

use crate::models::{NoticeKind, ToastNotice};

/// Oldest notices are dropped past this many
pub const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u32,
    notices: Vec<ToastNotice>,
}

impl NoticeQueue {
    /// Append a notice, returning its id
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.notices.push(ToastNotice { id, text: text.into(), kind });
        if self.notices.len() > MAX_VISIBLE {
            let overflow = self.notices.len() - MAX_VISIBLE;
            self.notices.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[ToastNotice] {
        &self.notices
    }
}
