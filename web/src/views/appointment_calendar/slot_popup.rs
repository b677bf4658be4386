use leptos::prelude::*;
use thaw::*;

use crate::booking::ConfirmedSelections;
use crate::calendar::{Day, HourRange};

/// Hour picker for the clicked day. Opens whenever `selected_day` is set.
#[component]
pub fn SlotPopup(
    selected_day: RwSignal<Option<Day>>,
    selections: RwSignal<ConfirmedSelections>,
) -> impl IntoView {
    let selected_hours = RwSignal::new(String::new());

    // preselect the first range offered for the day
    Effect::new(move |_| {
        let first = selected_day.with(|day| {
            day.as_ref()
                .and_then(|d| d.available_hours.first())
                .map(HourRange::label)
        });
        selected_hours.set(first.unwrap_or_default());
    });

    let close = move || selected_day.set(None);

    let confirm = move || {
        let hours = selected_hours.get();
        if hours.is_empty() {
            return;
        }
        if let Some(day) = selected_day.get_untracked() {
            selections.update(|s| {
                s.confirm(day.date, hours);
            });
            close();
        }
    };

    view! {
        {move || {
            selected_day
                .get()
                .map(|day| {
                    let title = format!("Hours for {}", day.date.format("%A %-d %B %Y"));
                    let has_hours = !day.available_hours.is_empty();
                    let options = day
                        .available_hours
                        .iter()
                        .map(|hours| {
                            let label = hours.label();
                            view! {
                                <option value=label.clone()>
                                    {format!("{} - {}", hours.start, hours.end)}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>();

                    view! {
                        <div class="background-popup">
                            <div class="available-hour">
                                <div class="popup-content">
                                    <h4>{title}</h4>
                                    {if has_hours {
                                        view! {
                                            <select
                                                prop:value=move || selected_hours.get()
                                                on:change=move |ev| selected_hours.set(event_target_value(&ev))
                                            >
                                                {options}
                                            </select>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <p class="no-hours">"No hours available"</p> }.into_any()
                                    }}
                                    <div class="onclick-buttons">
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            disabled=!has_hours
                                            on_click=move |_| confirm()
                                        >
                                            "Confirm"
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| close()
                                        >
                                            "Close"
                                        </Button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
