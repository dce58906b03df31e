//! Chat page reached from the homepage at `/assistant/:slug`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The homepage hands over the first prompt as `?initialMessage=` plus
//! read-once session flags. On mount the page consumes both and sends the
//! prompt exactly once; later messages come from the composer. Unmounting
//! stops the reply timers and settles any pending placeholder.

use assistant::nav::{ChatParams, Handoff, INITIAL_MESSAGE_PARAM, IS_WORKFLOW_PARAM, take_handoff};
use assistant::text_loop::HOMEPAGE_PLACEHOLDERS;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::chat_thread::{ChatComposer, ChatMessages, send_message};
use crate::state::chat::{ChatSignals, ChatState};
use crate::util::driver::Alive;
use crate::util::session::BrowserSessionStore;

#[component]
pub fn AssistantThreadPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
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

    let chat_params = query.with_untracked(|q| {
        ChatParams::from_query(q.get(INITIAL_MESSAGE_PARAM), q.get(IS_WORKFLOW_PARAM).as_deref())
    });
    let handoff = RwSignal::new(Handoff::default());
    let started = StoredValue::new(false);

    // Effects only run in the browser, so the handoff is read after
    // hydration and never during server rendering.
    let initial_alive = alive.clone();
    let initial_message = chat_params.initial_message.clone();
    Effect::new(move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        handoff.set(take_handoff(&mut BrowserSessionStore));
        if let Some(text) = initial_message.as_deref() {
            send_message(signals, &initial_alive, Some(text));
        }
    });

    let is_workflow = move || chat_params.is_workflow || handoff.with(|h| h.workflow_initiated);
    let title = move || {
        params.with(|p| p.get("slug")).map_or_else(|| "New chat".to_owned(), |slug| slug.replace('-', " "))
    };
    let on_send = Callback::new(move |()| {
        send_message(signals, &alive, None);
    });

    view! {
        <div class="assistant-thread" class:assistant-thread--from-home=move || handoff.with(|h| h.from_homepage)>
            <header class="assistant-thread__header">
                <A href="/assistant" attr:class="assistant-thread__back">
                    "← Assistant"
                </A>
                <h1 class="assistant-thread__title">{title}</h1>
                <Show when=is_workflow>
                    <span class="assistant-thread__badge">"Workflow"</span>
                </Show>
            </header>
            <ChatMessages />
            <div class="assistant-thread__composer">
                <ChatComposer placeholders=&HOMEPAGE_PLACEHOLDERS on_send=on_send />
            </div>
        </div>
    }
}
