//! Rotating placeholder text.

use assistant::text_loop::{DEFAULT_INTERVAL_MS, TextLoop};
use leptos::prelude::*;

use crate::util::driver::{Alive, every};

/// Shows one of `items` at a time, advancing every `interval_ms`.
#[component]
pub fn TextLoopView(
    items: &'static [&'static str],
    #[prop(default = DEFAULT_INTERVAL_MS)] interval_ms: u64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let text_loop = RwSignal::new(TextLoop::with_interval(items.len(), interval_ms));
    let alive = Alive::new();
    every(text_loop.get_untracked().interval_ms(), alive.clone(), move || {
        text_loop.try_update(|t| {
            t.tick();
        });
    });
    on_cleanup(move || alive.kill());

    view! {
        <span class=format!("text-loop {class}")>
            {move || {
                let index = text_loop.get().index();
                view! {
                    <span class="text-loop__item" data-index=index.to_string()>
                        {items.get(index).copied().unwrap_or_default()}
                    </span>
                }
            }}
        </span>
    }
}
