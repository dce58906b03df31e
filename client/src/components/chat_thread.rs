//! Chat surface pieces: thread tabs, message list and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! All three read the page-scoped [`ChatSignals`] from context. The
//! hosting page owns the `Alive` flag and passes a send callback to the
//! composer, so timers stop when the page unmounts.

use assistant::conversation::{IgnoreReason, SendOutcome};
use assistant::message::Role;
use leptos::prelude::*;

use crate::components::text_loop::TextLoopView;
use crate::components::thinking_state::ThinkingState;
use crate::state::chat::{ChatSignals, ChatState, MessageKey};
use crate::util::clock::now_ms;
use crate::util::driver::{Alive, drive_conversation};

/// Send `text`, or the composer draft when `None`, and start the pipeline
/// driver when a reply begins. A started reply from the composer clears the
/// draft.
pub fn send_message(signals: ChatSignals, alive: &Alive, text: Option<&str>) -> Option<SendOutcome> {
    let now = now_ms();
    let from_draft = text.is_none();
    let text = match text {
        Some(text) => text.to_owned(),
        None => signals.draft.try_get_untracked()?,
    };
    let result = signals.chat.try_update(|c| c.send(&text, now))?;
    match result {
        Ok(outcome @ SendOutcome::Started { .. }) => {
            if from_draft {
                signals.draft.set(String::new());
            }
            drive_conversation(signals, alive.clone());
            Some(outcome)
        }
        Ok(outcome @ SendOutcome::Ignored(reason)) => {
            if reason == IgnoreReason::ThreadBusy {
                #[cfg(feature = "hydrate")]
                log::debug!("send ignored: reply still loading");
            }
            Some(outcome)
        }
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("send failed: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            None
        }
    }
}

/// Header strip with one tab per thread and a "New chat" button.
#[component]
pub fn ThreadTabs() -> impl IntoView {
    let chat = expect_context::<ChatSignals>().chat;

    view! {
        <div class="thread-tabs">
            <div class="thread-tabs__list">
                {move || {
                    let tabs = chat.with(ChatState::tabs);
                    if tabs.is_empty() {
                        return view! { <span class="thread-tabs__tab thread-tabs__tab--active">"New chat"</span> }
                            .into_any();
                    }
                    tabs.into_iter()
                        .map(|tab| {
                            let id = tab.id.clone();
                            view! {
                                <button
                                    class="thread-tabs__tab"
                                    class:thread-tabs__tab--active=tab.active
                                    title=tab.title
                                    on:click=move |_| {
                                        chat.update(|c| {
                                            if let Err(err) = c.select_thread(&id) {
                                                #[cfg(feature = "hydrate")]
                                                log::warn!("thread select failed: {err}");
                                                #[cfg(not(feature = "hydrate"))]
                                                let _ = err;
                                            }
                                        });
                                    }
                                >
                                    {tab.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            <button
                class="thread-tabs__new"
                title="New chat"
                on:click=move |_| {
                    chat.update(|c| {
                        c.new_thread(now_ms());
                    });
                }
            >
                "+"
            </button>
        </div>
    }
}

/// Scrollable message list with edge gradients. Follows new content only
/// while the reader sits near the bottom.
#[component]
pub fn ChatMessages(#[prop(optional)] zero_state: Option<ChildrenFn>) -> impl IntoView {
    let signals = expect_context::<ChatSignals>();
    let chat = signals.chat;
    let metrics = signals.metrics;
    let list_ref = NodeRef::<leptos::html::Div>::new();
    let scroll_trigger = signals.scroll_trigger();

    Effect::new(move || {
        scroll_trigger.track();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get_untracked() {
                crate::util::dom::scroll_to_bottom(&el);
            }
        }
    });

    let on_scroll = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get_untracked() {
                let next = crate::util::dom::chat_metrics(&el);
                metrics.maybe_update(|m| {
                    let changed = *m != next;
                    *m = next;
                    changed
                });
            }
        }
    };
    let in_chat_mode = Memo::new(move |_| chat.with(ChatState::is_in_chat_mode));
    let keys = Memo::new(move |_| chat.with(ChatState::message_keys));
    let zero_state = StoredValue::new(zero_state);

    view! {
        <div class="chat-messages">
            <div class="chat-messages__gradient chat-messages__gradient--top" class:is-visible=move || metrics.with(|m| m.is_scrolled)></div>
            <div
                class="chat-messages__gradient chat-messages__gradient--bottom"
                class:is-visible=move || metrics.with(|m| m.show_bottom_gradient)
            ></div>
            <div class="chat-messages__scroll" node_ref=list_ref on:scroll=on_scroll>
                <Show
                    when=move || in_chat_mode.get()
                    fallback=move || zero_state.with_value(|z| z.as_ref().map(|z| z()))
                >
                    <For each=move || keys.get() key=Clone::clone let:row>
                        <ChatMessage row=row />
                    </For>
                </Show>
            </div>
        </div>
    }
}

/// One row, mounted once per key. Content updates in place as the reply
/// pipeline patches the message.
#[component]
fn ChatMessage(row: MessageKey) -> impl IntoView {
    let chat = expect_context::<ChatSignals>().chat;
    let message = {
        let row = row.clone();
        Memo::new(move |_| chat.with(|c| c.message_at(&row)))
    };
    let role = message.with_untracked(|m| m.as_ref().map_or(Role::Assistant, |m| m.role));

    if role == Role::User {
        return view! {
            <div class="chat-message chat-message--user">
                <div class="chat-message__bubble">
                    {move || message.with(|m| m.as_ref().map(|m| m.content.clone()).unwrap_or_default())}
                </div>
            </div>
        }
        .into_any();
    }

    let phase = Memo::new(move |_| chat.with(|c| c.thinking_phase(&row)));
    let summary = Signal::derive(move || message.with(|m| m.as_ref().and_then(|m| m.visible_summary().map(str::to_owned))));
    let bullets =
        Signal::derive(move || message.with(|m| m.as_ref().map(|m| m.visible_bullets().to_vec()).unwrap_or_default()));
    let content = move || {
        message.with(|m| {
            m.as_ref().filter(|m| !m.is_loading && !m.content.is_empty()).map(|m| m.content.clone())
        })
    };

    view! {
        <div class="chat-message chat-message--assistant">
            {move || phase.get().map(|loading| view! { <ThinkingState summary=summary bullets=bullets loading=loading/> })}
            {move || content().map(|text| view! { <div class="chat-message__content">{text}</div> })}
        </div>
    }
    .into_any()
}

/// Message composer. Enter sends, Shift+Enter inserts a newline; input is
/// disabled while the active thread is waiting on a reply.
#[component]
pub fn ChatComposer(placeholders: &'static [&'static str], on_send: Callback<()>) -> impl IntoView {
    let signals = expect_context::<ChatSignals>();
    let chat = signals.chat;
    let draft = signals.draft;
    let focused = RwSignal::new(false);
    let loading = Memo::new(move |_| chat.with(ChatState::is_loading));
    let has_text = move || draft.with(|d| !d.trim().is_empty());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() && !loading.get_untracked() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="chat-composer">
            <div class="chat-composer__field">
                <textarea
                    class="chat-composer__input"
                    rows="1"
                    disabled=move || loading.get()
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                ></textarea>
                <Show when=move || !has_text() && !focused.get()>
                    <div class="chat-composer__placeholder">
                        <TextLoopView items=placeholders/>
                    </div>
                </Show>
            </div>
            <div class="chat-composer__actions">
                <button
                    class="btn btn--primary chat-composer__send"
                    disabled=move || loading.get() || !has_text()
                    on:click=move |_| on_send.run(())
                >
                    {move || if loading.get() { "…" } else { "↵" }}
                </button>
            </div>
        </div>
    }
}
