use super::{CalendarGrid, SearchForm, SlotPopup, SubmitPanel};
use crate::booking::ConfirmedSelections;
use crate::calendar::Day;
use leptos::prelude::*;
use shared_types::Slot;

/// Search filters, month calendar and submission, composed in that order.
#[component]
pub fn AppointmentCalendar() -> impl IntoView {
    let slots = RwSignal::new(Vec::<Slot>::new());
    let selections = RwSignal::new(ConfirmedSelections::new());
    let selected_day = RwSignal::new(None::<Day>);
    let patient_id = RwSignal::new(String::new());

    let on_day_select = move |day: Day| {
        selected_day.set(Some(day));
    };

    view! {
        <div class="appointment-calendar-container">
            <div class="appointment-calendar-header">
                <h1>"Book a medical appointment"</h1>
                <p>"Search for available hours, pick the ones that suit you and send your request."</p>
            </div>

            <SearchForm slots=slots selections=selections patient_id=patient_id />

            <div class="appointment-calendar-layout">
                <div class="appointment-calendar-main">
                    <CalendarGrid
                        slots=slots
                        selections=selections
                        on_day_select=on_day_select
                    />
                </div>

                <div class="appointment-calendar-sidebar">
                    <SubmitPanel
                        slots=slots
                        selections=selections
                        patient_id=patient_id
                    />
                </div>
            </div>

            <SlotPopup selected_day=selected_day selections=selections />
        </div>
    }
}
