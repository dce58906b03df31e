//! Local UI chrome state (toasts).
//!
//! DESIGN
//! ======
//! Keeps transient notices out of page state so any component can raise a
//! toast through context without knowing who renders it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Info,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Info => "toast--info",
        }
    }
}

/// A fire-and-forget notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
}

impl UiState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast { id: id.clone(), kind, message: message.into() });
        id
    }

    /// Remove a toast. Returns `false` when it was already gone.
    pub fn dismiss_toast(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
