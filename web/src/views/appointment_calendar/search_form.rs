use leptos::logging::{error, log};
use leptos::prelude::*;
use shared_types::{AvailabilityQuery, Slot, TimeRangeFilter};
use thaw::*;

use crate::booking::ConfirmedSelections;
use crate::components::{ErrorNotice, InfoNotice, LoadingNotice};
use crate::regions::{comunas_for, REGIONS, SPECIALTIES};
use crate::server::check_availability;

#[component]
pub fn SearchForm(
    slots: RwSignal<Vec<Slot>>,
    selections: RwSignal<ConfirmedSelections>,
    patient_id: RwSignal<String>,
) -> impl IntoView {
    let region = RwSignal::new(String::new());
    let comuna = RwSignal::new(String::new());
    let area = RwSignal::new(String::new());
    let specialty = RwSignal::new(String::new());
    let time_range = RwSignal::new(TimeRangeFilter::Any);
    let search_error = RwSignal::new(None::<String>);
    let found_slots = RwSignal::new(None::<usize>);
    let dropped_selections = RwSignal::new(0usize);

    let search = Action::new(|query: &AvailabilityQuery| {
        let query = query.clone();
        async move { check_availability(query).await }
    });

    Effect::new(move |_| {
        if let Some(result) = search.value().get() {
            match result {
                Ok(response) => {
                    let all_slots = response.all_slots();
                    log!(
                        "Availability: {} slots from {} medics",
                        all_slots.len(),
                        response.available_slots.len()
                    );
                    let mut dropped = 0;
                    selections.update(|s| dropped = s.retain_available(&all_slots));
                    if dropped > 0 {
                        log!("Dropped {} confirmed hours no longer offered", dropped);
                    }
                    dropped_selections.set(dropped);
                    found_slots.set(Some(all_slots.len()));
                    search_error.set(None);
                    slots.set(all_slots);
                }
                Err(e) => {
                    error!("Availability request failed: {}", e);
                    found_slots.set(None);
                    dropped_selections.set(0);
                    search_error.set(Some(format!("Could not load availability: {}", e)));
                }
            }
        }
    });

    let current_query = move || AvailabilityQuery {
        region: region.get(),
        comuna: comuna.get(),
        area: area.get().trim().to_string(),
        specialty: specialty.get(),
        time_range_filter: time_range.get(),
    };

    view! {
        <form class="search-form" on:submit=move |ev| {
            ev.prevent_default();
            search_error.set(None);
            search.dispatch(current_query());
        }>
            <div class="search-form-fields">
                <div class="form-group">
                    <label for="region">"Region"</label>
                    <select
                        id="region"
                        prop:value=move || region.get()
                        on:change=move |ev| {
                            region.set(event_target_value(&ev));
                            comuna.set(String::new());
                        }
                    >
                        <option value="" disabled>"Select a region"</option>
                        {REGIONS
                            .iter()
                            .map(|r| view! { <option value=r.code>{r.name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="comuna">"Comuna"</label>
                    <select
                        id="comuna"
                        prop:value=move || comuna.get()
                        disabled=move || region.get().is_empty()
                        on:change=move |ev| comuna.set(event_target_value(&ev))
                    >
                        <option value="" disabled>"Select a comuna"</option>
                        {move || {
                            comunas_for(&region.get())
                                .iter()
                                .map(|c| view! { <option value=*c>{*c}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label for="area">"Area"</label>
                    <Input id="area" placeholder="Area code" value=area />
                </div>

                <div class="form-group">
                    <label for="specialty">"Specialty"</label>
                    <select
                        id="specialty"
                        prop:value=move || specialty.get()
                        on:change=move |ev| specialty.set(event_target_value(&ev))
                    >
                        <option value="" disabled>"Select a specialty"</option>
                        {SPECIALTIES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="time-range">"Time"</label>
                    <select
                        id="time-range"
                        prop:value=move || time_range.get().as_query_value()
                        on:change=move |ev| {
                            time_range.set(TimeRangeFilter::from_query_value(&event_target_value(&ev)))
                        }
                    >
                        {TimeRangeFilter::ALL
                            .iter()
                            .map(|range| {
                                view! { <option value=range.as_query_value()>{range.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="patient-id">"Patient ID"</label>
                    <Input
                        id="patient-id"
                        input_type=InputType::Number
                        placeholder="e.g. 1"
                        value=patient_id
                    />
                </div>
            </div>

            <div class="form-actions">
                <Button
                    button_type=ButtonType::Submit
                    appearance=ButtonAppearance::Primary
                    loading=Signal::from(search.pending())
                >
                    "Find appointments"
                </Button>
            </div>

            {move || {
                if search.pending().get() {
                    view! { <LoadingNotice message="Checking availability..." /> }.into_any()
                } else if let Some(message) = search_error.get() {
                    view! { <ErrorNotice message=message /> }.into_any()
                } else if let Some(count) = found_slots.get() {
                    let dropped = dropped_selections.get();
                    view! {
                        <p class="search-result">
                            {if count == 0 {
                                "No available hours for these filters.".to_string()
                            } else {
                                format!("{} available hours found.", count)
                            }}
                        </p>
                        {(dropped > 0)
                            .then(|| {
                                let message = format!(
                                    "{} confirmed hours are no longer offered and were removed.",
                                    dropped
                                );
                                view! { <InfoNotice message=message /> }
                            })}
                    }
                        .into_any()
                } else {
                    view! {}.into_any()
                }
            }}
        </form>
    }
}
