//! Batch columns dialog: prompt-driven column generation with an editable
//! table of proposed columns.

use std::sync::Arc;

use assistant::columns::{BatchColumnsForm, ColumnEdit, ColumnSpec, ColumnType, SelectionState};
use leptos::prelude::*;

use crate::components::standard_dialog::StandardDialog;
use crate::util::clock::now_ms;
use crate::util::driver::{Alive, after};

const BATCH_DIALOG_WIDTH_PX: u32 = 900;

/// Kick off a generation and schedule its completion. Returns whether one
/// started.
fn start_generation(form: RwSignal<BatchColumnsForm>, alive: &Alive) -> bool {
    let now = now_ms();
    let Some(due) = form.try_update(|f| f.generate(now)).flatten() else {
        return false;
    };
    after(due.saturating_sub(now), alive.clone(), move || {
        form.try_update(|f| f.advance(now_ms()));
    });
    true
}

#[component]
pub fn BatchColumnsDialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_add_columns: Callback<Vec<ColumnSpec>>,
) -> impl IntoView {
    let form = RwSignal::new(BatchColumnsForm::new());
    let alive = Alive::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.kill()
    });

    // Closing drops rows and any pending generation.
    let close = Callback::new(move |()| {
        form.update(BatchColumnsForm::reset);
        on_close.run(());
    });

    let generate = Callback::new(move |()| {
        start_generation(form, &alive);
    });

    let submit = move |_| {
        let Some(specs) = form.try_update(BatchColumnsForm::submit).flatten() else {
            return;
        };
        on_add_columns.run(specs);
        on_close.run(());
    };

    let row_ids = move || form.with(|f| f.columns().iter().map(|c| c.id.clone()).collect::<Vec<_>>());
    let selection = move || form.with(BatchColumnsForm::selection_state);

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <button class="btn btn--secondary" on:click=move |_| close.run(())>
                "Cancel"
            </button>
            <button
                class="btn btn--primary"
                disabled=move || !form.with(BatchColumnsForm::can_submit)
                on:click=submit
            >
                "Add columns"
            </button>
        }
        .into_any()
    });

    view! {
        <StandardDialog open=open on_close=close title="Batch columns" width=BATCH_DIALOG_WIDTH_PX footer=footer>
            <div class="batch-columns">
                <p class="batch-columns__intro">"Ask Harvey to generate multiple columns based on your prompt"</p>
                <div class="batch-columns__prompt">
                    <textarea
                        class="batch-columns__prompt-input"
                        placeholder="Describe the information you want to extract from your documents"
                        rows="3"
                        prop:value=move || form.with(|f| f.prompt.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.prompt = value);
                        }
                    ></textarea>
                    <div class="batch-columns__prompt-footer">
                        <span class="batch-columns__hint">
                            "e.g. Key terms of a merger agreement, parties and effective dates"
                        </span>
                        <button
                            class="btn btn--primary"
                            disabled=move || !form.with(BatchColumnsForm::can_generate)
                            on:click=move |_| generate.run(())
                        >
                            {move || if form.with(BatchColumnsForm::is_generating) { "Generating..." } else { "Generate columns" }}
                        </button>
                    </div>
                </div>

                <Show when=move || !form.with(|f| f.columns().is_empty())>
                    <table class="batch-columns__table">
                        <thead>
                            <tr>
                                <th class="batch-columns__check">
                                    <input
                                        type="checkbox"
                                        aria-label="Select all columns"
                                        prop:checked=move || selection() == SelectionState::All
                                        prop:indeterminate=move || selection() == SelectionState::Some
                                        on:change=move |_| form.update(BatchColumnsForm::toggle_all)
                                    />
                                </th>
                                <th>"Title"</th>
                                <th>"Query"</th>
                                <th>"Type"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=row_ids key=Clone::clone let:id>
                                <BatchColumnRow form=form id=id />
                            </For>
                        </tbody>
                    </table>
                </Show>

                <button
                    class="btn btn--ghost batch-columns__add"
                    on:click=move |_| {
                        form.update(|f| {
                            f.add_empty();
                        });
                    }
                >
                    "+ Add column"
                </button>
            </div>
        </StandardDialog>
    }
}

/// One editable row. Fields read by id so typing keeps focus in the row.
#[component]
fn BatchColumnRow(form: RwSignal<BatchColumnsForm>, id: String) -> impl IntoView {
    let id = StoredValue::new(id);
    let read = move |pick: fn(&assistant::columns::BatchColumn) -> String| {
        form.with(|f| id.with_value(|id| f.columns().iter().find(|c| &c.id == id).map(pick).unwrap_or_default()))
    };
    let edit = move |edit: ColumnEdit| id.with_value(|id| form.update(|f| f.update(id, edit)));

    view! {
        <tr class="batch-columns__row">
            <td class="batch-columns__check">
                <input
                    type="checkbox"
                    prop:checked=move || {
                        form.with(|f| id.with_value(|id| f.columns().iter().any(|c| &c.id == id && c.selected)))
                    }
                    on:change=move |_| id.with_value(|id| form.update(|f| f.toggle(id)))
                />
            </td>
            <td>
                <input
                    class="batch-columns__field"
                    placeholder="Column title"
                    prop:value=move || read(|c| c.title.clone())
                    on:input=move |ev| edit(ColumnEdit::Title(event_target_value(&ev)))
                />
            </td>
            <td>
                <input
                    class="batch-columns__field"
                    placeholder="What do you want to know?"
                    prop:value=move || read(|c| c.query.clone())
                    on:input=move |ev| edit(ColumnEdit::Query(event_target_value(&ev)))
                />
            </td>
            <td>
                <select
                    class="batch-columns__type"
                    prop:value=move || read(|c| c.column_type.id().to_owned())
                    on:change=move |ev| edit(ColumnEdit::Type(ColumnType::from_id(&event_target_value(&ev))))
                >
                    {ColumnType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.id()>{t.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td>
                <button
                    class="batch-columns__remove"
                    title="Remove column"
                    on:click=move |_| id.with_value(|id| form.update(|f| f.remove(id)))
                >
                    "✕"
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
#[path = "batch_columns_dialog_test.rs"]
mod batch_columns_dialog_test;
