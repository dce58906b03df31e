//! Expandable folder tree with curved connector trails.

use assistant::tree::{FileTree, FolderItem, TrailSegment, TreeClick, TreeRow};
use leptos::prelude::*;

fn trail_cell(segment: TrailSegment) -> AnyView {
    match segment {
        TrailSegment::Branch => view! {
            <div class="tree-trail tree-trail--branch">
                <img src="/tree-line-curve-continue.svg" alt="" />
            </div>
        }
        .into_any(),
        TrailSegment::Corner => view! {
            <div class="tree-trail tree-trail--corner">
                <img src="/tree-line-curve.svg" alt="" />
            </div>
        }
        .into_any(),
        TrailSegment::Pass => view! {
            <div class="tree-trail tree-trail--pass">
                <div class="tree-trail__line"></div>
            </div>
        }
        .into_any(),
        TrailSegment::Blank => view! { <div class="tree-trail"></div> }.into_any(),
    }
}

fn folder_icon(row: &TreeRow) -> &'static str {
    if row.is_expanded && row.has_children { "/folder-vault-filled.svg" } else { "/folderIcon.svg" }
}

#[component]
pub fn FileTreeView(
    folders: &'static [FolderItem],
    #[prop(optional)] on_folder_click: Option<Callback<String>>,
    #[prop(optional)] on_file_click: Option<Callback<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let tree = RwSignal::new(FileTree::default());

    let click = move |id: &str| {
        let Some(item) = FileTree::find(folders, id) else {
            return;
        };
        match tree.try_update(|t| t.click(item)) {
            Some(TreeClick::Folder(id)) => {
                if let Some(cb) = on_folder_click {
                    cb.run(id);
                }
            }
            Some(TreeClick::File(id)) => {
                if let Some(cb) = on_file_click {
                    cb.run(id);
                }
            }
            None => {}
        }
    };

    view! {
        <div class=format!("file-tree {class}")>
            {move || {
                tree.with(|t| t.rows(folders))
                    .into_iter()
                    .map(|row| {
                        let id = row.id.clone();
                        let icon = folder_icon(&row);
                        // Root rows carry no trail.
                        let trail = (row.depth > 0)
                            .then(|| row.trail.iter().copied().map(trail_cell).collect::<Vec<_>>());
                        view! {
                            <div
                                class="file-tree__row"
                                class:file-tree__row--open=row.is_expanded && row.has_children
                                role="treeitem"
                                aria-expanded=row.has_children.then(|| row.is_expanded.to_string())
                                on:click=move |_| click(&id)
                            >
                                {trail.map(|cells| view! { <div class="file-tree__trail">{cells}</div> })}
                                <img class="file-tree__icon" src=icon alt="Folder" />
                                <span class="file-tree__name">{row.name.clone()}</span>
                                {row.has_children.then(|| {
                                    view! {
                                        <span
                                            class="file-tree__chevron"
                                            class:file-tree__chevron--collapsed=!row.is_expanded
                                        >
                                            "⌄"
                                        </span>
                                    }
                                })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
