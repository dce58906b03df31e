//! "Monitor for new files" dialog: schedule, source and notification
//! settings for pulling new files into a review.

use std::sync::Arc;

use assistant::monitoring::{ExtractionMode, Frequency, HourOfDay, Monitor, MonitorSchedule, SourceLocation, Weekday};
use leptos::prelude::*;

use crate::components::standard_dialog::StandardDialog;

/// Option at `value` when it is an index into `all`.
fn pick<T: Copy>(all: &[T], value: &str) -> Option<T> {
    value.parse::<usize>().ok().and_then(|i| all.get(i).copied())
}

fn position<T: PartialEq>(all: &[T], item: &T) -> String {
    all.iter().position(|x| x == item).unwrap_or_default().to_string()
}

#[component]
pub fn MonitoringDialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] monitor: Signal<Monitor>,
    on_save: Callback<MonitorSchedule>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(MonitorSchedule::default());

    // Each opening starts from the saved schedule, or defaults.
    Effect::new(move |_| {
        if open.get() {
            draft.set(monitor.with_untracked(Monitor::draft));
        }
    });

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <button
                class="btn btn--secondary"
                disabled=move || !monitor.with(Monitor::can_remove)
                on:click=move |_| {
                    on_remove.run(());
                    on_close.run(());
                }
            >
                "Remove monitor"
            </button>
            <button
                class="btn btn--primary"
                on:click=move |_| {
                    on_save.run(draft.get_untracked());
                    on_close.run(());
                }
            >
                {move || monitor.with(Monitor::primary_label)}
            </button>
        }
        .into_any()
    });

    view! {
        <StandardDialog open=open on_close=on_close title="Monitor for new files" footer=footer>
            <div class="monitoring">
                <p class="monitoring__intro">"Automatically add new files into review"</p>

                <label class="monitoring__field">
                    <span class="monitoring__label">"Frequency"</span>
                    <select
                        prop:value=move || draft.with(|d| position(&Frequency::ALL, &d.frequency))
                        on:change=move |ev| {
                            if let Some(frequency) = pick(&Frequency::ALL, &event_target_value(&ev)) {
                                draft.update(|d| d.frequency = frequency);
                            }
                        }
                    >
                        {Frequency::ALL
                            .iter()
                            .enumerate()
                            .map(|(i, f)| view! { <option value=i.to_string()>{f.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <div class="monitoring__row">
                    <label class="monitoring__field">
                        <span class="monitoring__label">"Hour of day"</span>
                        <select
                            prop:value=move || draft.with(|d| d.hour.hour().to_string())
                            on:change=move |ev| {
                                let hour = event_target_value(&ev).parse::<u8>().ok().and_then(HourOfDay::new);
                                if let Some(hour) = hour {
                                    draft.update(|d| d.hour = hour);
                                }
                            }
                        >
                            {HourOfDay::options()
                                .map(|h| view! { <option value=h.hour().to_string()>{h.to_string()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="monitoring__field">
                        <span class="monitoring__label">"Day of week"</span>
                        <select
                            prop:value=move || draft.with(|d| position(&Weekday::ALL, &d.day))
                            on:change=move |ev| {
                                if let Some(day) = pick(&Weekday::ALL, &event_target_value(&ev)) {
                                    draft.update(|d| d.day = day);
                                }
                            }
                        >
                            {Weekday::ALL
                                .iter()
                                .enumerate()
                                .map(|(i, d)| view! { <option value=i.to_string()>{d.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <label class="monitoring__field">
                    <span class="monitoring__label">"Source location"</span>
                    <select
                        prop:value=move || draft.with(|d| position(&SourceLocation::ALL, &d.source))
                        on:change=move |ev| {
                            if let Some(source) = pick(&SourceLocation::ALL, &event_target_value(&ev)) {
                                draft.update(|d| d.source = source);
                            }
                        }
                    >
                        {SourceLocation::ALL
                            .iter()
                            .enumerate()
                            .map(|(i, s)| view! { <option value=i.to_string()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <div class="monitoring__radios" role="radiogroup">
                    {[ExtractionMode::New, ExtractionMode::All]
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <label class="monitoring__radio">
                                    <input
                                        type="radio"
                                        name="extraction-mode"
                                        prop:checked=move || draft.with(|d| d.extraction == mode)
                                        on:change=move |_| draft.update(|d| d.extraction = mode)
                                    />
                                    <span>{mode.label()}</span>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="monitoring__toggles">
                    <label class="monitoring__toggle">
                        <span>"Email updates"</span>
                        <input
                            type="checkbox"
                            role="switch"
                            prop:checked=move || draft.with(|d| d.email_updates)
                            on:change=move |_| draft.update(|d| d.email_updates = !d.email_updates)
                        />
                    </label>
                    <label class="monitoring__toggle">
                        <span>"Notifications"</span>
                        <input
                            type="checkbox"
                            role="switch"
                            prop:checked=move || draft.with(|d| d.notifications)
                            on:change=move |_| draft.update(|d| d.notifications = !d.notifications)
                        />
                    </label>
                </div>
            </div>
        </StandardDialog>
    }
}
