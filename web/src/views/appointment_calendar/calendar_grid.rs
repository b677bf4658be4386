use leptos::prelude::*;
use shared_types::Slot;
use thaw::*;

use crate::booking::ConfirmedSelections;
use crate::calendar::{visible_days, weeks, CalendarState, Day, WEEKDAY_LABELS};

#[component]
pub fn CalendarGrid(
    slots: RwSignal<Vec<Slot>>,
    selections: RwSignal<ConfirmedSelections>,
    on_day_select: impl Fn(Day) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    // Effects run only in the browser; today is the viewer's date, never the server's.
    let calendar = RwSignal::new(None::<CalendarState>);
    Effect::new(move |_| {
        if calendar.get_untracked().is_none() {
            calendar.set(Some(CalendarState::new(chrono::Local::now().date_naive())));
        }
    });

    let days = Memo::new(move |_| {
        let state = calendar.get();
        slots.with(|slots| visible_days(state, slots))
    });

    view! {
        <div class="calendar-grid">
            <div class="date">
                <div class="date-container">
                    <div class="month-year">
                        <h3>
                            {move || {
                                calendar
                                    .with(|c| c.as_ref().map(CalendarState::label))
                                    .unwrap_or_default()
                            }}
                        </h3>
                    </div>
                    <div class="text">
                        <p>"Pick a highlighted day to see its hours"</p>
                    </div>
                </div>
                <div class="date-arrows">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            calendar.update(|c| c.iter_mut().for_each(CalendarState::prev_month))
                        }
                    >
                        "←"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            calendar.update(|c| c.iter_mut().for_each(CalendarState::next_month))
                        }
                    >
                        "→"
                    </Button>
                </div>
            </div>

            <div class="month">
                <div class="text-week">
                    {WEEKDAY_LABELS
                        .iter()
                        .map(|label| view! { <div class="text-day">{*label}</div> })
                        .collect::<Vec<_>>()}
                </div>

                {move || {
                    weeks(&days.get())
                        .into_iter()
                        .map(|week| {
                            view! {
                                <div class="week">
                                    {week
                                        .into_iter()
                                        .map(|day| {
                                            let number = day.number;
                                            let date = day.date;
                                            let class = day.css_class();
                                            let selectable = day.is_selectable();
                                            let confirmed = selections.with(|s| s.for_day(date).to_vec());

                                            view! {
                                                <div
                                                    class=class
                                                    on:click=move |_| {
                                                        if selectable {
                                                            on_day_select(day.clone());
                                                        }
                                                    }
                                                >
                                                    <div class="number">{number}</div>
                                                    {confirmed
                                                        .into_iter()
                                                        .map(|hours| view! { <div class="task">{hours}</div> })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="calendar-legend">
                <div class="legend-item">
                    <div class="legend-color available"></div>
                    <span>"Available"</span>
                </div>
                <div class="legend-item">
                    <div class="legend-color focus"></div>
                    <span>"Today"</span>
                </div>
                <div class="legend-item">
                    <div class="legend-color outside-month"></div>
                    <span>"Other month"</span>
                </div>
            </div>
        </div>
    }
}
