//! Modal shell shared by the review dialogs: header with title and close
//! button, padded body and an optional right-aligned footer.

use leptos::prelude::*;

pub const DEFAULT_DIALOG_WIDTH_PX: u32 = 540;

#[component]
pub fn StandardDialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional)] footer: Option<ChildrenFn>,
    #[prop(default = DEFAULT_DIALOG_WIDTH_PX)] width: u32,
    children: ChildrenFn,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let style = format!("width: {width}px; max-width: {width}px;");
    let title = StoredValue::new(title);
    let footer = StoredValue::new(footer);
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <div class="dialog__backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    style=style.clone()
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="dialog__header">
                        <h2 class="dialog__title">{title.get_value()}</h2>
                        <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                            "✕"
                        </button>
                    </div>
                    <div class="dialog__body">{children.with_value(|c| c())}</div>
                    {footer
                        .with_value(|f| f.as_ref().map(|f| f()))
                        .map(|footer| view! { <div class="dialog__footer">{footer}</div> })}
                </div>
            </div>
        </Show>
    }
}
