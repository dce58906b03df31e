//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    assistant_home::AssistantHomePage, assistant_thread::AssistantThreadPage, review_grid::ReviewGridPage,
    vault_project::VaultProjectPage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides app-wide contexts and sets up client-side routing. Chat state is
/// page scoped and provided by the pages that host a conversation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/counsel.css"/>
        <Title text="Assistant"/>

        <Router>
            <main id="main-content" class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/assistant"/> }/>
                    <Route path=StaticSegment("assistant") view=AssistantHomePage/>
                    <Route path=(StaticSegment("assistant"), ParamSegment("slug")) view=AssistantThreadPage/>
                    <Route path=StaticSegment("review-grid") view=ReviewGridPage/>
                    <Route
                        path=(StaticSegment("vault"), StaticSegment("project"), ParamSegment("id"))
                        view=VaultProjectPage
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
