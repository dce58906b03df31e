//! Workflow cards on the assistant homepage: tab strip, search and a grid
//! whose later rows fade in with scroll progress.

use assistant::catalog::{Workflow, WorkflowKind};
use assistant::filter::WorkflowTab;
use assistant::scroll::GRID_COLUMNS;
use leptos::prelude::*;

use crate::state::home::{HomeState, ScrollReveal, card_style_css};
use crate::util::data::workflows;

fn kind_icon(kind: WorkflowKind) -> &'static str {
    match kind {
        WorkflowKind::Draft => "/central_icons/Draft.svg",
        WorkflowKind::Output => "/central_icons/Streaming.svg",
        WorkflowKind::Review => "/central_icons/Review.svg",
    }
}

#[component]
pub fn WorkflowGrid(
    home: RwSignal<HomeState>,
    reveal: RwSignal<ScrollReveal>,
    on_select: Callback<String>,
    controls_ref: NodeRef<leptos::html::Div>,
    first_card_ref: NodeRef<leptos::html::Button>,
) -> impl IntoView {
    // Only tab and query changes re-run the filters; composer typing and
    // scroll frames do not.
    let filters = Memo::new(move |_| home.with(|h| (h.tab, h.query.clone())));
    let visible = Memo::new(move |_| {
        filters.track();
        home.with_untracked(|h| h.visible(workflows()).into_iter().cloned().collect::<Vec<_>>())
    });
    let matching = Memo::new(move |_| {
        filters.track();
        home.with_untracked(|h| h.matching_count(workflows()))
    });
    let show_hint = move || {
        let total = matching.get();
        reveal.with(|r| r.show_scroll_hint(total))
    };
    let rest = move || {
        visible.with(|items| {
            items
                .iter()
                .enumerate()
                .skip(GRID_COLUMNS)
                .map(|(index, workflow)| (index, workflow.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="workflows">
            <div class="workflows__controls" node_ref=controls_ref>
                <div class="workflows__tabs" role="tablist">
                    {WorkflowTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="workflows__tab"
                                    class:workflows__tab--active=move || home.with(|h| h.tab == tab)
                                    role="tab"
                                    data-id=tab.key()
                                    on:click=move |_| {
                                        home.update(|h| {
                                            h.select_tab(tab.key());
                                        });
                                    }
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <input
                    type="text"
                    class="workflows__search"
                    placeholder="Search workflows"
                    prop:value=move || home.with(|h| h.query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        home.update(|h| h.query = query);
                    }
                />
            </div>

            <div class="workflows__first-row">
                <div class="workflows__grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .take(GRID_COLUMNS)
                            .enumerate()
                            .map(|(index, workflow)| {
                                let card_ref = if index == 0 { first_card_ref } else { NodeRef::new() };
                                view! { <WorkflowCard workflow=workflow style=String::new() on_select=on_select card_ref=card_ref /> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="workflows__hint" class:is-visible=show_hint aria-hidden="true">
                    <span>"Scroll for more workflows"</span>
                    <span class="workflows__hint-arrow">"↓"</span>
                </div>
            </div>

            // Cards stay mounted across scroll frames; only their style
            // follows the reveal progress, so the stagger can transition.
            <div class="workflows__grid workflows__grid--rest">
                <For
                    each=rest
                    key=|(index, workflow)| (*index, workflow.id.clone())
                    children=move |(index, workflow)| {
                        let style = Signal::derive(move || reveal.with(|r| card_style_css(r.card_style(index))));
                        view! { <WorkflowCard workflow=workflow style=style on_select=on_select card_ref=NodeRef::new() /> }
                    }
                />
            </div>

            <Show when=move || matching.get() == 0>
                <div class="workflows__empty">
                    <p>"No workflows found matching your search."</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn WorkflowCard(
    workflow: Workflow,
    #[prop(into)] style: Signal<String>,
    on_select: Callback<String>,
    card_ref: NodeRef<leptos::html::Button>,
) -> impl IntoView {
    let title = workflow.title.clone();

    view! {
        <button class="workflow-card" style=move || style.get() node_ref=card_ref on:click=move |_| on_select.run(title.clone())>
            <h3 class="workflow-card__title">{workflow.title.clone()}</h3>
            <p class="workflow-card__description">{workflow.description.clone()}</p>
            <div class="workflow-card__meta">
                <img src=kind_icon(workflow.kind) alt="" width="12" height="12" />
                <span>{workflow.kind.as_str()}</span>
                <span class="workflow-card__dot">"•"</span>
                <span>{format!("{} steps", workflow.steps)}</span>
            </div>
        </button>
    }
}
