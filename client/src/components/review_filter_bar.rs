//! Filter chips and display options above the review table.

use assistant::filter_bar::{ActiveFilter, DisplayColumn, FilterColumnType, FilterCondition};
use leptos::prelude::*;

use crate::state::review::ReviewState;

fn column_icon(column_type: FilterColumnType) -> &'static str {
    match column_type {
        FilterColumnType::File => "/central_icons/File.svg",
        FilterColumnType::Text | FilterColumnType::Selection => "/central_icons/Text.svg",
    }
}

#[component]
pub fn ReviewFilterBar(review: RwSignal<ReviewState>) -> impl IntoView {
    let filter_menu_open = RwSignal::new(false);
    let display_menu_open = RwSignal::new(false);

    let available = move || review.with(|r| r.filters.available(&r.filterable_columns()).into_iter().cloned().collect::<Vec<_>>());
    let has_display_columns = move || review.with(|r| !r.display.all().is_empty());

    view! {
        <div class="review-filter-bar">
            <div class="review-filter-bar__filters">
                <div class="menu-anchor">
                    <button
                        class="btn btn--small btn--secondary"
                        disabled=move || available().is_empty()
                        on:click=move |_| filter_menu_open.update(|open| *open = !*open)
                    >
                        <img src="/central_icons/Filter.svg" alt="Filter" width="14" height="14" />
                        "Filter"
                    </button>
                    <Show when=move || filter_menu_open.get() && !available().is_empty()>
                        <div class="menu" role="menu">
                            {move || {
                                available()
                                    .into_iter()
                                    .map(|column| {
                                        let icon = column_icon(column.column_type);
                                        let header = column.header.clone();
                                        view! {
                                            <button
                                                class="menu__item"
                                                role="menuitem"
                                                on:click=move |_| {
                                                    review.update(|r| {
                                                        r.filters.add(&column);
                                                    });
                                                    filter_menu_open.set(false);
                                                }
                                            >
                                                <img src=icon alt="" width="14" height="14" />
                                                <span>{header}</span>
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </div>

                {move || {
                    review
                        .with(|r| r.filters.filters().to_vec())
                        .into_iter()
                        .map(|filter| view! { <FilterChip review=review filter=filter /> })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || review.with(|r| !r.filters.filters().is_empty())>
                    <button class="btn btn--small btn--ghost" on:click=move |_| review.update(|r| r.filters.clear())>
                        "Clear"
                    </button>
                </Show>
            </div>

            <div class="review-filter-bar__display menu-anchor">
                <button
                    class="btn btn--small btn--secondary"
                    disabled=move || !has_display_columns()
                    on:click=move |_| display_menu_open.update(|open| *open = !*open)
                >
                    <img src="/central_icons/SliderSettings.svg" alt="Display options" width="14" height="14" />
                    "Display options"
                </button>
                <Show when=move || display_menu_open.get() && has_display_columns()>
                    <DisplayOptions review=review />
                </Show>
            </div>
        </div>
    }
}

/// Button-group chip: column, condition, value and remove.
#[component]
fn FilterChip(review: RwSignal<ReviewState>, filter: ActiveFilter) -> impl IntoView {
    let column_id = StoredValue::new(filter.column_id.clone());
    let current = filter.condition;

    view! {
        <div class="filter-chip">
            <span class="filter-chip__column">
                <img src=column_icon(filter.column_type) alt="" width="14" height="14" />
                <span>{filter.column_header.clone()}</span>
            </span>
            <select
                class="filter-chip__condition"
                prop:value=if current == FilterCondition::IsAnyOf { "0" } else { "1" }
                on:change=move |ev| {
                    let condition = match event_target_value(&ev).as_str() {
                        "1" => FilterCondition::IsNoneOf,
                        _ => FilterCondition::IsAnyOf,
                    };
                    column_id.with_value(|id| review.update(|r| r.filters.set_condition(id, condition)));
                }
            >
                {FilterCondition::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, c)| view! { <option value=i.to_string()>{c.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <span class="filter-chip__value">{filter.value_label().to_owned()}</span>
            <button
                class="filter-chip__remove"
                title="Remove filter"
                on:click=move |_| column_id.with_value(|id| review.update(|r| r.filters.remove(id)))
            >
                "✕"
            </button>
        </div>
    }
}

/// Fixed columns, then the reorderable list. Rows reorder by drag and drop.
#[component]
fn DisplayOptions(review: RwSignal<ReviewState>) -> impl IntoView {
    let dragging = RwSignal::new(None::<String>);

    let fixed = move || review.with(|r| r.display.fixed().cloned().collect::<Vec<_>>());
    let sortable = move || review.with(|r| r.display.sortable().cloned().collect::<Vec<_>>());

    view! {
        <div class="menu display-options" role="menu">
            <Show when=move || !fixed().is_empty()>
                <div class="display-options__section">
                    <div class="display-options__heading">"Fixed columns"</div>
                    {move || {
                        fixed()
                            .into_iter()
                            .map(|column| {
                                view! {
                                    <div class="display-options__item display-options__item--fixed">
                                        <img src=column_icon(FilterColumnType::File) alt="" width="14" height="14" />
                                        <span>{column.header}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || !fixed().is_empty() && !sortable().is_empty()>
                <div class="display-options__divider"></div>
            </Show>
            <div class="display-options__section">
                {move || {
                    sortable()
                        .into_iter()
                        .map(|column| view! { <SortableColumn review=review column=column dragging=dragging /> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show when=move || review.with(|r| r.display.all().is_empty())>
                <div class="display-options__empty">"No columns to display"</div>
            </Show>
        </div>
    }
}

#[component]
fn SortableColumn(review: RwSignal<ReviewState>, column: DisplayColumn, dragging: RwSignal<Option<String>>) -> impl IntoView {
    let id = StoredValue::new(column.id.clone());
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let Some(active) = dragging.get_untracked() else {
            return;
        };
        dragging.set(None);
        id.with_value(|over| {
            review.update(|r| {
                r.display.reorder(&active, over);
            });
        });
    };

    view! {
        <div
            class="display-options__item"
            class:display-options__item--dragging=move || id.with_value(|id| dragging.with(|d| d.as_ref() == Some(id)))
            draggable="true"
            on:dragstart=move |_| dragging.set(Some(id.get_value()))
            on:dragend=move |_| dragging.set(None)
            on:dragover=move |ev| ev.prevent_default()
            on:drop=on_drop
        >
            <button
                class="display-options__check"
                class:display-options__check--on=column.visible
                role="menuitemcheckbox"
                aria-checked=column.visible.to_string()
                on:click=move |_| id.with_value(|id| review.update(|r| r.display.toggle_visibility(id)))
            >
                {column.visible.then_some("✓")}
            </button>
            <span class="display-options__label">{column.header.clone()}</span>
            <span class="display-options__grip" aria-hidden="true">"⋮⋮"</span>
        </div>
    }
}
