//! Transient status notices ("toasts").
//!
//! DESIGN
//! ======
//! Pages push a [`Notice`] into the shared queue and forget about it. The
//! toast host renders the queue and removes entries after
//! [`NOTICE_DURATION`] or when closed.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier used by the toast host.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

/// A single user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), description: description.into() }
    }

    /// Error notice with the standard "Error" title.
    pub fn error(description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: "Error".to_owned(), description: description.into() }
    }
}

/// A queued notice with its removal handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Ordered queue of visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append a notice and return the id used to dismiss it.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        id
    }

    /// Remove the notice with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
