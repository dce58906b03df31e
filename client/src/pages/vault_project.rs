//! Vault project view at `/vault/project/:id?name=`.
//!
//! Projects start empty; the side tree browses the shared vault folders.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::file_tree_view::FileTreeView;
use crate::util::data::folders;

const UNTITLED_PROJECT: &str = "Untitled";

fn project_name(name: Option<String>) -> String {
    name.filter(|n| !n.trim().is_empty()).unwrap_or_else(|| UNTITLED_PROJECT.to_owned())
}

#[component]
pub fn VaultProjectPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let selected = RwSignal::new(None::<String>);

    let name = move || project_name(query.with(|q| q.get("name")));
    let project_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <div class="vault-project" data-project=project_id>
            <aside class="vault-project__tree">
                <h2 class="vault-project__tree-title">"Vault"</h2>
                <FileTreeView
                    folders=folders()
                    on_folder_click=Callback::new(move |id: String| selected.set(Some(id)))
                    class="vault-project__folders"
                />
            </aside>

            <section class="vault-project__main">
                <div class="vault-project__bar">
                    <A href="/assistant" attr:class="icon-btn vault-project__back">
                        "←"
                    </A>
                </div>
                <div class="vault-project__header">
                    <h1>{name}</h1>
                    <p class="vault-project__meta">"0 files ⋅ 0 queries"</p>
                </div>
                <div class="vault-project__empty">
                    <div class="vault-project__empty-icon">
                        <img src="/privateFolderIcon.svg" alt="Empty project" width="40" height="40" />
                    </div>
                    <h2>"No files yet"</h2>
                    <p>"Upload files to this project to start analyzing and querying your documents."</p>
                    <Show when=move || selected.with(Option::is_some)>
                        <p class="vault-project__selected">
                            {move || selected.get().map(|id| format!("Browsing folder {id}"))}
                        </p>
                    </Show>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
#[path = "vault_project_test.rs"]
mod vault_project_test;
