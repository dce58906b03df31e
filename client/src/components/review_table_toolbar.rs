//! Review table toolbar: chat toggle, add actions and cell display settings.

use assistant::review::{CellAlignment, TextLength};
use leptos::prelude::*;

use crate::state::review::{ReviewDialog, ReviewState};

fn alignment_icon(alignment: CellAlignment, active: bool) -> String {
    let fill = if active { "filled" } else { "outline" };
    format!("/{}-align-{fill}.svg", alignment.label().to_lowercase())
}

#[component]
pub fn ReviewTableToolbar(review: RwSignal<ReviewState>, on_close_artifact: Callback<()>) -> impl IntoView {
    let chat_open = move || review.with(|r| r.chat_open);
    let settings = move || review.with(|r| r.settings);

    view! {
        <div class="review-toolbar">
            <div class="review-toolbar__group">
                <button
                    class="btn btn--small btn--secondary"
                    class:is-active=chat_open
                    on:click=move |_| review.update(ReviewState::toggle_chat)
                >
                    <img
                        src=move || {
                            if chat_open() { "/central_icons/Assistant - Filled.svg" } else { "/central_icons/Assistant.svg" }
                        }
                        alt="Harvey"
                        width="14"
                        height="14"
                    />
                    "Ask Harvey"
                </button>
                <div class="review-toolbar__separator"></div>
                <button
                    class="btn btn--small btn--secondary"
                    on:click=move |_| review.update(|r| r.open(ReviewDialog::VaultPicker))
                >
                    <img src="/central_icons/Add File.svg" alt="Add file" width="14" height="14" />
                    "Add file"
                </button>
                <button
                    class="btn btn--small btn--secondary"
                    on:click=move |_| review.update(|r| r.open(ReviewDialog::BatchColumns))
                >
                    <img src="/central_icons/Add Column.svg" alt="Add column" width="14" height="14" />
                    "Add column"
                </button>
                <div class="review-toolbar__separator"></div>
                <div class="review-toolbar__segment">
                    {CellAlignment::ALL
                        .into_iter()
                        .map(|alignment| {
                            let active = move || settings().alignment == alignment;
                            view! {
                                <button
                                    class="icon-btn"
                                    class:is-active=active
                                    title=format!("{} align", alignment.label())
                                    on:click=move |_| review.update(|r| r.settings.alignment = alignment)
                                >
                                    <img
                                        src=move || alignment_icon(alignment, active())
                                        alt=format!("{} align", alignment.label())
                                        width="14"
                                        height="14"
                                    />
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="review-toolbar__separator"></div>
                <div class="review-toolbar__segment">
                    <button
                        class="icon-btn"
                        class:is-active=move || !settings().text_wrap
                        title="Text overflow"
                        on:click=move |_| review.update(|r| r.settings.text_wrap = false)
                    >
                        <img src="/overflow.svg" alt="Text overflow" width="14" height="14" />
                    </button>
                    <button
                        class="icon-btn"
                        class:is-active=move || settings().text_wrap
                        title="Text wrapping"
                        on:click=move |_| review.update(|r| r.settings.text_wrap = true)
                    >
                        <img src="/wrapping.svg" alt="Text wrapping" width="14" height="14" />
                    </button>
                </div>
                <div class="review-toolbar__separator"></div>
                <div class="review-toolbar__segment">
                    <button
                        class="icon-btn"
                        class:is-active=move || settings().text_length == TextLength::Concise
                        title="Concise"
                        on:click=move |_| review.update(|r| r.settings.text_length = TextLength::Concise)
                    >
                        <img src="/concise.svg" alt="Concise" width="14" height="14" />
                    </button>
                    <button
                        class="icon-btn"
                        class:is-active=move || settings().text_length == TextLength::Extend
                        title="Extend"
                        on:click=move |_| review.update(|r| r.settings.text_length = TextLength::Extend)
                    >
                        <img src="/extend.svg" alt="Extend" width="14" height="14" />
                    </button>
                </div>
            </div>
            <div class="review-toolbar__group">
                <button
                    class="icon-btn"
                    disabled=move || !chat_open()
                    title=move || if chat_open() { "Close" } else { "Open assistant to close artifact" }
                    on:click=move |_| {
                        if chat_open() {
                            on_close_artifact.run(());
                        }
                    }
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}
