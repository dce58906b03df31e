//! Assistant homepage: composer, quick actions and the workflow grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sending a prompt or launching a workflow writes the session handoff flags
//! and navigates to `/assistant/<slug>`; the thread page takes it from
//! there. Scrolling the page drives the card reveal, coalesced to one update
//! per animation frame.

use assistant::nav::{chat_route, vault_project_route, write_handoff};
use assistant::scroll::{FrameGate, top_min_height};
use assistant::text_loop::HOMEPAGE_PLACEHOLDERS;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_loop::TextLoopView;
use crate::components::workflow_grid::WorkflowGrid;
use crate::state::home::{HomeState, ScrollReveal};
use crate::util::dom::viewport_height;
use crate::util::driver::{Alive, after};
use crate::util::frame::request_frame;
use crate::util::session::BrowserSessionStore;

const AMEND_PROJECT_ID: &str = "amend-v-delta";
const AMEND_PROJECT_NAME: &str = "Amend v Delta IP Litigation";

#[component]
pub fn AssistantHomePage() -> impl IntoView {
    let home = RwSignal::new(HomeState::default());
    let reveal = RwSignal::new(ScrollReveal::default());
    // Pending-frame flag. Not reactive: dropped scroll events notify nobody.
    let gate = StoredValue::new(FrameGate::new());
    let navigate = use_navigate();
    let alive = Alive::new();
    let page_ref = NodeRef::<leptos::html::Div>::new();
    let controls_ref = NodeRef::<leptos::html::Div>::new();
    let first_card_ref = NodeRef::<leptos::html::Button>::new();
    let focused = RwSignal::new(false);

    // Route to open next. Navigation runs from an effect so callbacks stay
    // plain signal writes.
    let target = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(route) = target.get() {
            navigate(&route, NavigateOptions::default());
        }
    });

    let open_chat = move |text: String, is_workflow: bool| {
        write_handoff(&mut BrowserSessionStore, is_workflow);
        target.set(Some(chat_route(&text, is_workflow)));
    };
    let send = move || {
        if let Some(text) = home.try_update(HomeState::begin_send).flatten() {
            open_chat(text, false);
        }
    };
    let on_workflow = Callback::new(move |title: String| {
        if home.try_update(HomeState::begin_workflow).unwrap_or(false) {
            open_chat(title, true);
        }
    });

    let compute_layout = move || {
        #[cfg(feature = "hydrate")]
        {
            let controls = controls_ref.get_untracked().map(|el| el.get_bounding_client_rect().height());
            let card = first_card_ref.get_untracked().map(|el| f64::from(el.offset_height()));
            let height = top_min_height(viewport_height(), controls, card);
            home.try_update(|h| h.top_min_height = height);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (controls_ref, first_card_ref, viewport_height, top_min_height);
        }
    };
    // Measure once the first render has landed, then on every resize.
    after(0, alive.clone(), compute_layout);
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| compute_layout());
        on_cleanup(move || handle.remove());
    }
    on_cleanup({
        let alive = alive.clone();
        move || alive.kill()
    });

    let on_scroll = move |_| {
        if !gate.try_update_value(FrameGate::try_schedule).unwrap_or(false) {
            return;
        }
        request_frame(move || {
            gate.try_update_value(FrameGate::complete);
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = page_ref.get_untracked() {
                    let top = f64::from(el.scroll_top());
                    reveal.maybe_update(|r| r.set_scroll_top(top));
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };
    let has_text = move || home.with(|h| !h.composer.trim().is_empty());
    let top_style = move || {
        let height = home.with(|h| h.top_min_height);
        if height > 0.0 {
            format!("visibility: visible; opacity: 1; min-height: {height}px;")
        } else {
            "visibility: hidden; opacity: 0; min-height: calc(100vh - 225px);".to_owned()
        }
    };

    view! {
        <div class="assistant-home" node_ref=page_ref on:scroll=on_scroll>
            <div class="assistant-home__top" style=top_style>
                <div class="assistant-home__hero">
                    <img class="assistant-home__logo" src="/Harvey_Logo.svg" alt="Harvey" width="100" height="32" />
                    <div class="assistant-home__pills">
                        <button class="pill">"Matter"</button>
                        <button class="pill">"Prompts"</button>
                    </div>

                    <div class="composer">
                        <div class="composer__field">
                            <textarea
                                class="composer__input"
                                rows="1"
                                prop:value=move || home.with(|h| h.composer.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    home.update(|h| h.composer = value);
                                }
                                on:keydown=on_keydown
                                on:focus=move |_| focused.set(true)
                                on:blur=move |_| focused.set(false)
                            ></textarea>
                            <Show when=move || !has_text() && !focused.get()>
                                <div class="composer__placeholder">
                                    <TextLoopView items=&HOMEPAGE_PLACEHOLDERS />
                                </div>
                            </Show>
                        </div>
                        <div class="composer__controls">
                            <div class="composer__left">
                                <button class="composer__chip">"Sources"</button>
                            </div>
                            <button
                                class="btn btn--primary composer__send"
                                disabled=move || !has_text() || home.with(|h| h.navigating)
                                on:click=move |_| send()
                            >
                                {move || if home.with(|h| h.navigating) { "…" } else { "↵" }}
                            </button>
                        </div>
                    </div>

                    <div class="assistant-home__actions">
                        <button class="action-chip">
                            <img src="/central_icons/Draft.svg" alt="" width="14" height="14" />
                            <span>"Compose draft"</span>
                        </button>
                        <button class="action-chip" on:click=move |_| target.set(Some("/review-grid".to_owned()))>
                            <img src="/central_icons/Review.svg" alt="" width="14" height="14" />
                            <span>"Run extraction"</span>
                        </button>
                        <button class="action-chip">
                            <img src="/lexis.svg" alt="" width="14" height="14" />
                            <span>"LexisNexis"</span>
                        </button>
                        <button class="action-chip">
                            <img src="/central_icons/Building.svg" alt="" width="14" height="14" />
                            <span>"EDGAR"</span>
                        </button>
                        <button
                            class="action-chip"
                            on:click=move |_| target.set(Some(vault_project_route(AMEND_PROJECT_ID, AMEND_PROJECT_NAME)))
                        >
                            <img src="/folderIcon.svg" alt="" width="14" height="14" />
                            <span>{AMEND_PROJECT_NAME}</span>
                        </button>
                    </div>
                </div>
            </div>

            <WorkflowGrid home=home reveal=reveal on_select=on_workflow controls_ref=controls_ref first_card_ref=first_card_ref />
        </div>
    }
}
