//! Toast stack and the helper that raises auto-dismissing notices.

use leptos::prelude::*;

use crate::state::ui::{TOAST_DURATION_MS, ToastKind, UiState};
use crate::util::driver::{Alive, after};

/// Push a toast and dismiss it after [`TOAST_DURATION_MS`].
pub fn show_toast(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = ui.try_update(|u| u.push_toast(kind, message)) else {
        return;
    };
    after(TOAST_DURATION_MS, Alive::new(), move || {
        ui.try_update(|u| u.dismiss_toast(&id));
    });
}

/// Bottom-right toast stack reading `UiState` from context.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div class=format!("toast {}", toast.kind.css_modifier()) role="status">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| {
                                        ui.update(|u| {
                                            u.dismiss_toast(&id);
                                        });
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
