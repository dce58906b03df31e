//! Collapsible "thinking" block shown above an assistant reply.

use leptos::prelude::*;

/// While `loading`, the block is open and shows whatever the pipeline has
/// revealed so far. Once settled it collapses to a "Thought" toggle. The
/// caller remounts the block when `loading` flips; reveal progress arrives
/// through the signals.
#[component]
pub fn ThinkingState(
    #[prop(into)] summary: Signal<Option<String>>,
    #[prop(into)] bullets: Signal<Vec<String>>,
    loading: bool,
) -> impl IntoView {
    let open = RwSignal::new(loading);
    let title = if loading { "Thinking..." } else { "Thought" };

    view! {
        <div class="thinking-state" class:thinking-state--loading=loading>
            <button
                class="thinking-state__header"
                disabled=loading
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="thinking-state__title">{title}</span>
                {(!loading).then(|| view! { <span class="thinking-state__chevron" class:is-open=move || open.get()>"›"</span> })}
            </button>
            <Show when=move || open.get()>
                <div class="thinking-state__body">
                    {move || summary.get().map(|s| view! { <p class="thinking-state__summary">{s}</p> })}
                    <ul class="thinking-state__bullets">
                        {move || {
                            bullets
                                .get()
                                .into_iter()
                                .map(|b| view! { <li class="thinking-state__bullet">{b}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
