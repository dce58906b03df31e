//! Review grid workspace at `/review-grid`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Left: an optional chat panel running the simulated reply pipeline. Right:
//! the review artifact with an inline-editable title, toolbar, filter bar
//! and a table of picked vault files against generated columns. Dialogs
//! (vault picker, batch columns, monitoring) are driven by
//! `ReviewState::dialog`.

use std::sync::Arc;

use assistant::review::{CellAlignment, TITLE_UPDATED_NOTICE, TextLength, TitleCommit, ZERO_STATE_PROMPTS};
use leptos::prelude::*;

use crate::components::batch_columns_dialog::BatchColumnsDialog;
use crate::components::chat_thread::{ChatComposer, ChatMessages, ThreadTabs, send_message};
use crate::components::manage_grouped_files_popover::ManageGroupedFilesPopover;
use crate::components::monitoring_dialog::MonitoringDialog;
use crate::components::review_filter_bar::ReviewFilterBar;
use crate::components::review_table_toolbar::ReviewTableToolbar;
use crate::components::toast::show_toast;
use crate::components::vault_file_picker_dialog::VaultFilePickerDialog;
use crate::state::chat::{ChatSignals, ChatState};
use crate::state::review::{FILE_COLUMN_HEADER, ReviewDialog, ReviewState};
use crate::state::ui::{ToastKind, UiState};
use crate::util::driver::Alive;

const REVIEW_PLACEHOLDERS: [&str; 4] = [
    "Add columns for key terms and dates…",
    "Extract clauses from all documents…",
    "Compare terms across agreements…",
    "Summarize each document's obligations…",
];

/// Button labels for [`ZERO_STATE_PROMPTS`], in the same order.
const SUGGESTION_LABELS: [&str; 3] = ["Add standard review columns", "Extract key clauses", "Compare document terms"];

fn table_class(alignment: CellAlignment, text_wrap: bool, text_length: TextLength) -> String {
    let mut class = format!("review-table review-table--align-{}", alignment.label().to_lowercase());
    if text_wrap {
        class.push_str(" review-table--wrap");
    }
    if text_length == TextLength::Extend {
        class.push_str(" review-table--extend");
    }
    class
}

#[component]
pub fn ReviewGridPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let review = RwSignal::new(ReviewState::default());
    let signals = ChatSignals::new();
    provide_context(signals);
    let chat = signals.chat;

    let alive = Alive::new();
    on_cleanup({
        let alive = alive.clone();
        move || {
            alive.kill();
            chat.try_update(ChatState::shutdown);
        }
    });

    let dialog_open = move |dialog: ReviewDialog| Signal::derive(move || review.with(|r| r.dialog == dialog));
    let close_dialog = Callback::new(move |()| review.update(ReviewState::close_dialog));

    let close_artifact = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }
    });

    view! {
        <div class="review-grid">
            <Show when=move || review.with(|r| r.chat_open)>
                <ReviewChatPanel alive=alive.clone() />
                <div class="review-grid__separator"></div>
            </Show>

            <section class="review-artifact">
                <ArtifactHeader review=review ui=ui />
                <ReviewTableToolbar review=review on_close_artifact=close_artifact />
                <ReviewFilterBar review=review />
                <ReviewTable review=review />
            </section>

            <VaultFilePickerDialog
                open=dialog_open(ReviewDialog::VaultPicker)
                on_close=close_dialog
                on_files_selected=Callback::new(move |files| review.update(|r| r.set_files(files)))
                vault_name="StubHub IPO"
            />
            <BatchColumnsDialog
                open=dialog_open(ReviewDialog::BatchColumns)
                on_close=close_dialog
                on_add_columns=Callback::new(move |specs| review.update(|r| r.add_columns(specs)))
            />
            <MonitoringDialog
                open=dialog_open(ReviewDialog::Monitoring)
                on_close=close_dialog
                monitor=Signal::derive(move || review.with(|r| r.monitor.clone()))
                on_save=Callback::new(move |schedule| review.update(|r| r.monitor.save(schedule)))
                on_remove=Callback::new(move |()| review.update(|r| r.monitor.remove()))
            />
        </div>
    }
}

/// Chat side panel: thread tabs, messages with a zero state, composer.
#[component]
fn ReviewChatPanel(alive: Alive) -> impl IntoView {
    let signals = expect_context::<ChatSignals>();
    let loading = Memo::new(move |_| signals.chat.with(ChatState::is_loading));

    let suggestion_alive = alive.clone();
    let zero_state: ChildrenFn = Arc::new(move || {
        let alive = suggestion_alive.clone();
        view! {
            <div class="review-chat__zero">
                <div class="review-chat__welcome">
                    <h1>"Welcome to Review"</h1>
                    <p>"Ask Harvey to help build your review table or add columns."</p>
                </div>
                <p class="review-chat__get-started">"Get started…"</p>
                <div class="review-chat__suggestions">
                    {ZERO_STATE_PROMPTS
                        .into_iter()
                        .zip(SUGGESTION_LABELS)
                        .map(|(prompt, label)| {
                            let alive = alive.clone();
                            view! {
                                <button
                                    class="review-chat__suggestion"
                                    disabled=move || loading.get()
                                    on:click=move |_| {
                                        send_message(signals, &alive, Some(prompt));
                                    }
                                >
                                    <img src="/central_icons/Review.svg" alt="Review" width="16" height="16" />
                                    <span>{label}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_any()
    });

    let on_send = Callback::new(move |()| {
        send_message(signals, &alive, None);
    });

    view! {
        <aside class="review-chat">
            <ThreadTabs />
            <ChatMessages zero_state=zero_state />
            <ChatComposer placeholders=&REVIEW_PLACEHOLDERS on_send=on_send />
        </aside>
    }
}

/// Title and subtitle. Clicking the title edits it in place; Enter or a
/// click elsewhere saves, Escape cancels.
#[component]
fn ArtifactHeader(review: RwSignal<ReviewState>, ui: RwSignal<UiState>) -> impl IntoView {
    let title_ref = NodeRef::<leptos::html::Input>::new();
    let editing = move || review.with(|r| r.artifact.is_editing());

    let commit = move || {
        if let Some(TitleCommit::Updated(_)) = review.try_update(|r| r.artifact.commit_title()) {
            show_toast(ui, ToastKind::Success, TITLE_UPDATED_NOTICE);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if !review.with_untracked(|r| r.artifact.is_editing()) {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = title_ref.get_untracked().is_some_and(|el| el.contains(target.as_ref()));
            if !inside {
                commit();
            }
        });
        on_cleanup(move || handle.remove());
    }

    // Focus the input as soon as it mounts.
    Effect::new(move || {
        if let Some(input) = title_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            commit();
        }
        "Escape" => {
            ev.prevent_default();
            review.update(|r| r.artifact.cancel_editing());
        }
        _ => {}
    };

    view! {
        <header class="artifact-header">
            <div class="artifact-header__titles">
                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <button
                                class="artifact-header__title"
                                title="Rename"
                                on:click=move |_| review.update(|r| r.artifact.start_editing())
                            >
                                {move || review.with(|r| r.artifact.title.clone())}
                            </button>
                        }
                    }
                >
                    <input
                        class="artifact-header__title-input"
                        node_ref=title_ref
                        prop:value=move || review.with(|r| r.artifact.draft().unwrap_or_default().to_owned())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            review.update(|r| r.artifact.set_draft(&value));
                        }
                        on:keydown=on_keydown
                    />
                </Show>
                <Show when=move || review.with(|r| !r.artifact.subtitle.is_empty())>
                    <span class="artifact-header__subtitle">{move || review.with(|r| r.artifact.subtitle.clone())}</span>
                </Show>
            </div>
            <button
                class="btn btn--small btn--secondary"
                class:is-active=move || review.with(|r| r.monitor.is_active())
                on:click=move |_| review.update(|r| r.open(ReviewDialog::Monitoring))
            >
                <img src="/central_icons/Satellite.svg" alt="Monitor" width="14" height="14" />
                {move || if review.with(|r| r.monitor.is_active()) { "Monitoring" } else { "Monitor" }}
            </button>
        </header>
    }
}

/// File rows against the visible columns, or the empty state.
#[component]
fn ReviewTable(review: RwSignal<ReviewState>) -> impl IntoView {
    let grouped_anchor = NodeRef::<leptos::html::Button>::new();
    let grouped_open = RwSignal::new(false);

    let class = move || review.with(|r| table_class(r.settings.alignment, r.settings.text_wrap, r.settings.text_length));
    let headers = move || {
        review.with(|r| r.visible_columns().into_iter().map(|c| c.spec.title.clone()).collect::<Vec<_>>())
    };

    view! {
        <Show
            when=move || !review.with(|r| r.artifact.is_empty())
            fallback=move || {
                view! {
                    <div class="review-empty">
                        <img src="/folderIcon.svg" alt="" width="32" height="32" />
                        <h2>"Add files to get started"</h2>
                        <p>"Pick documents from a vault project, then add columns to extract."</p>
                        <div class="review-empty__actions">
                            <button
                                class="btn btn--primary"
                                on:click=move |_| review.update(|r| r.open(ReviewDialog::VaultPicker))
                            >
                                "Add files from Vault"
                            </button>
                            <button
                                class="btn btn--secondary"
                                on:click=move |_| review.update(|r| r.open(ReviewDialog::BatchColumns))
                            >
                                "Batch columns"
                            </button>
                        </div>
                    </div>
                }
            }
        >
            <div class="review-table-wrap">
                <table class=class>
                    <thead>
                        <tr>
                            <Show when=move || review.with(ReviewState::is_file_column_visible)>
                                <th class="review-table__file-header">
                                    <span>{FILE_COLUMN_HEADER}</span>
                                    <button
                                        class="icon-btn"
                                        title="Grouped files"
                                        node_ref=grouped_anchor
                                        on:click=move |_| grouped_open.update(|open| *open = !*open)
                                    >
                                        "⋯"
                                    </button>
                                </th>
                            </Show>
                            {move || {
                                headers()
                                    .into_iter()
                                    .map(|title| view! { <th>{title}</th> })
                                    .collect::<Vec<_>>()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let show_file = review.with(ReviewState::is_file_column_visible);
                            let columns = headers().len();
                            review
                                .with(|r| r.files().to_vec())
                                .into_iter()
                                .map(|file| {
                                    let icon = file.icon().asset();
                                    view! {
                                        <tr>
                                            {show_file
                                                .then(|| {
                                                    view! {
                                                        <td class="review-table__file">
                                                            <img src=icon alt="" width="16" height="16" />
                                                            <span>{file.name.clone()}</span>
                                                        </td>
                                                    }
                                                })}
                                            {(0..columns)
                                                .map(|_| view! { <td class="review-table__cell review-table__cell--pending">"—"</td> })
                                                .collect::<Vec<_>>()}
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
            <ManageGroupedFilesPopover
                open=grouped_open
                on_close=Callback::new(move |()| grouped_open.set(false))
                anchor=grouped_anchor
                grouped_files=Signal::derive(move || review.with(|r| r.files().to_vec()))
            />
        </Show>
    }
}

#[cfg(test)]
#[path = "review_grid_test.rs"]
mod review_grid_test;
