use super::*;

// =============================================================
// Toasts
// =============================================================

#[test]
fn push_toast_assigns_unique_ids() {
    let mut ui = UiState::default();
    let a = ui.push_toast(ToastKind::Success, "Review grid title updated");
    let b = ui.push_toast(ToastKind::Info, "Saved");
    assert_ne!(a, b);
    assert_eq!(ui.toasts.len(), 2);
    assert_eq!(ui.toasts[0].message, "Review grid title updated");
}

#[test]
fn dismiss_toast_is_idempotent() {
    let mut ui = UiState::default();
    let id = ui.push_toast(ToastKind::Success, "done");
    assert!(ui.dismiss_toast(&id));
    assert!(!ui.dismiss_toast(&id));
    assert!(ui.toasts.is_empty());
}

#[test]
fn toast_kind_modifiers() {
    assert_eq!(ToastKind::default(), ToastKind::Success);
    assert_eq!(ToastKind::Info.css_modifier(), "toast--info");
}
