//! Popover listing the files grouped under a review row. Anchored to the
//! right of its trigger; a mousedown outside both closes it.

use assistant::vault::VaultFile;
use leptos::prelude::*;

const POPOVER_WIDTH_PX: u32 = 400;
const POPOVER_MAX_HEIGHT_PX: u32 = 500;
const ANCHOR_GAP_PX: f64 = 8.0;

#[component]
pub fn ManageGroupedFilesPopover(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    anchor: NodeRef<leptos::html::Button>,
    #[prop(into)] grouped_files: Signal<Vec<VaultFile>>,
) -> impl IntoView {
    let popover_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if !open.get_untracked() {
                return;
            }
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            let inside_popover = popover_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
            let inside_anchor = anchor.get_untracked().is_some_and(|el| el.contains(Some(&target)));
            if !inside_popover && !inside_anchor {
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    let position = move || {
        #[cfg(feature = "hydrate")]
        {
            anchor.get().map_or_else(String::new, |el| {
                let rect = el.get_bounding_client_rect();
                format!(
                    "top: {}px; left: {}px; width: {POPOVER_WIDTH_PX}px; max-height: {POPOVER_MAX_HEIGHT_PX}px;",
                    rect.top(),
                    rect.right() + ANCHOR_GAP_PX
                )
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (anchor, ANCHOR_GAP_PX);
            format!("width: {POPOVER_WIDTH_PX}px; max-height: {POPOVER_MAX_HEIGHT_PX}px;")
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="popover grouped-files" node_ref=popover_ref style=position>
                <div class="popover__header">
                    <h3 class="popover__title">"Grouped files"</h3>
                    <button class="popover__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="popover__body">
                    {move || {
                        let files = grouped_files.get();
                        if files.is_empty() {
                            view! {
                                <p class="popover__placeholder">"Manage grouped files functionality coming soon..."</p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <ul class="grouped-files__list">
                                    {files
                                        .into_iter()
                                        .map(|file| {
                                            let icon = file.icon().asset();
                                            view! {
                                                <li class="grouped-files__item">
                                                    <img src=icon alt="" width="16" height="16" />
                                                    <span>{file.name}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
