//! Vault file picker: searchable table of project files with row selection.

use assistant::vault::{FileIcon, VaultFile, VaultPicker, filter_files};
use leptos::prelude::*;

use crate::util::data::vault_files;

#[component]
pub fn VaultFilePickerDialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_files_selected: Callback<Vec<VaultFile>>,
    #[prop(optional, into)] vault_name: Option<String>,
) -> impl IntoView {
    let picker = RwSignal::new(VaultPicker::default());
    let vault_name = StoredValue::new(vault_name.unwrap_or_else(|| "Vault".to_owned()));

    Effect::new(move |_| {
        if open.get() {
            picker.update(VaultPicker::reset);
        }
    });

    let toggle_all = move || {
        picker.update(|p| {
            let visible = filter_files(vault_files(), &p.query);
            p.selection.toggle_all(&visible);
        });
    };
    let all_selected = move || {
        picker.with(|p| {
            let visible = filter_files(vault_files(), &p.query);
            p.selection.all_selected(&visible)
        })
    };
    let add = move |_| {
        let files = picker.with_untracked(|p| p.selection.selected_files(vault_files()));
        on_files_selected.run(files);
        on_close.run(());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog__backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog vault-picker"
                    role="dialog"
                    aria-modal="true"
                    aria-label=move || format!("Select Files from {}", vault_name.get_value())
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="vault-picker__header">
                        <div class="vault-picker__badge">
                            <img src=FileIcon::Folder.asset() alt="Folder" width="24" height="24" />
                        </div>
                        <span class="vault-picker__name">{vault_name.get_value()}</span>
                        <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                            "✕"
                        </button>
                    </div>

                    <div class="vault-picker__search">
                        <input
                            type="text"
                            class="vault-picker__search-input"
                            placeholder="Search files and folders..."
                            prop:value=move || picker.with(|p| p.query.clone())
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                picker.update(|p| p.query = query);
                            }
                        />
                        <div class="vault-picker__chips">
                            <button class="vault-picker__chip">"+ Document type"</button>
                            <button class="vault-picker__chip">"+ File type"</button>
                            <button class="vault-picker__chip">"Recent"</button>
                            <button class="vault-picker__chip">"Favorites"</button>
                        </div>
                    </div>

                    <div class="vault-picker__table-wrap">
                        <table class="vault-picker__table">
                            <thead>
                                <tr>
                                    <th class="vault-picker__check">
                                        <input
                                            type="checkbox"
                                            aria-label="Select all"
                                            prop:checked=all_selected
                                            on:change=move |_| toggle_all()
                                        />
                                    </th>
                                    <th>"Name"</th>
                                    <th>"Size"</th>
                                </tr>
                            </thead>
                            <tbody>{move || file_rows(picker)}</tbody>
                        </table>
                    </div>

                    <div class="vault-picker__footer">
                        <p class="vault-picker__summary">{move || picker.with(|p| p.selection.summary())}</p>
                        <div class="vault-picker__actions">
                            <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--primary"
                                disabled=move || picker.with(|p| p.selection.is_empty())
                                on:click=add
                            >
                                "Add selected files"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn toggle_file(picker: RwSignal<VaultPicker>, id: &str) {
    picker.update(|p| p.selection.toggle(id));
}

fn file_rows(picker: RwSignal<VaultPicker>) -> AnyView {
    let rows = picker.with(|p| {
        filter_files(vault_files(), &p.query)
            .into_iter()
            .map(|f| (f.clone(), p.selection.is_selected(&f.id)))
            .collect::<Vec<_>>()
    });
    if rows.is_empty() {
        return view! {
            <tr>
                <td colspan="3" class="vault-picker__empty">
                    "No files found"
                </td>
            </tr>
        }
        .into_any();
    }

    rows.into_iter()
        .map(|(file, selected)| {
            let id = file.id.clone();
            let toggle = move || toggle_file(picker, &id);
            let toggle_row = toggle.clone();
            let icon = file.icon();
            view! {
                <tr class="vault-picker__row" class:vault-picker__row--selected=selected on:click=move |_| toggle_row()>
                    <td class="vault-picker__check" on:click=move |ev| ev.stop_propagation()>
                        <input type="checkbox" prop:checked=selected on:change=move |_| toggle() />
                    </td>
                    <td class="vault-picker__name-cell">
                        <img
                            src=icon.asset()
                            alt=if icon == FileIcon::Folder { "Folder" } else { "File" }
                            width="16"
                            height="16"
                        />
                        <span class="vault-picker__file-name">{file.name.clone()}</span>
                    </td>
                    <td class="vault-picker__size">{file.size_label().to_owned()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}

#[cfg(test)]
#[path = "vault_file_picker_dialog_test.rs"]
mod vault_file_picker_dialog_test;
