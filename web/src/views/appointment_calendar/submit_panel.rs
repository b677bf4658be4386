use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use shared_types::{AppointmentRequest, Slot};
use thaw::*;

use crate::booking::{
    apply_outcomes, prepare_submission, BatchReport, ConfirmedSelections, PendingAppointment,
};
use crate::components::{ErrorNotice, InfoNotice};
use crate::server::submit_appointments;

/// Confirmed hours summary plus the button that books them.
#[component]
pub fn SubmitPanel(
    slots: RwSignal<Vec<Slot>>,
    selections: RwSignal<ConfirmedSelections>,
    patient_id: RwSignal<String>,
) -> impl IntoView {
    let success_message = RwSignal::new(None::<String>);
    let submit_error = RwSignal::new(None::<String>);
    let in_flight = RwSignal::new(Vec::<PendingAppointment>::new());

    let submit = Action::new(|requests: &Vec<AppointmentRequest>| {
        let requests = requests.clone();
        async move { submit_appointments(requests).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(outcomes) => {
                    let pending = in_flight.get_untracked();
                    let mut report = BatchReport::default();
                    selections.update(|s| report = apply_outcomes(s, &pending, outcomes));
                    log!(
                        "Booked {} appointments, {} failed",
                        report.booked.len(),
                        report.failed.len()
                    );
                    if report.all_booked() {
                        submit_error.set(None);
                        success_message.set(Some(report.describe()));
                    } else {
                        warn!("Some appointments failed: {:?}", report.failed);
                        success_message.set(None);
                        submit_error.set(Some(report.describe()));
                    }
                }
                Err(e) => {
                    error!("Appointment submission failed: {}", e);
                    submit_error.set(Some(format!("The appointments could not be sent: {}", e)));
                }
            }
        }
    });

    let send = move || {
        success_message.set(None);
        submit_error.set(None);

        let patient = match patient_id.get().trim().parse::<i64>() {
            Ok(id) if id > 0 => id,
            _ => {
                submit_error.set(Some("Enter a valid patient ID before sending.".to_string()));
                return;
            }
        };

        let prepared = selections.with(|confirmed| {
            slots.with(|slots| prepare_submission(confirmed, slots, patient))
        });
        match prepared {
            Ok(pending) => {
                log!("Sending {} appointment requests", pending.len());
                let requests = pending.iter().map(|p| p.request.clone()).collect();
                in_flight.set(pending);
                submit.dispatch(requests);
            }
            Err(e) => submit_error.set(Some(e.to_string())),
        }
    };

    let confirmed_rows = move || {
        selections.with(|s| {
            s.iter()
                .map(|(day, hours)| (day, hours.to_string()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="submit-panel">
            <h3>"Confirmed hours"</h3>
            {move || {
                let rows = confirmed_rows();
                if rows.is_empty() {
                    view! { <p class="no-selection">"No hours confirmed yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="confirmed-list">
                            {rows
                                .into_iter()
                                .map(|(day, hours)| {
                                    let text = format!("{} {}", day.format("%a %-d %b %Y"), hours);
                                    view! {
                                        <li class="confirmed-item">
                                            <span>{text}</span>
                                            <button
                                                class="remove"
                                                on:click=move |_| {
                                                    selections.update(|s| {
                                                        s.remove(day, &hours);
                                                    });
                                                }
                                            >
                                                "×"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}

            <div class="c-buttons">
                <Button
                    appearance=ButtonAppearance::Primary
                    loading=Signal::from(submit.pending())
                    on_click=move |_| send()
                >
                    "Send"
                </Button>
            </div>

            {move || {
                if let Some(message) = submit_error.get() {
                    view! { <ErrorNotice message=message /> }.into_any()
                } else if let Some(message) = success_message.get() {
                    view! { <InfoNotice message=message success=true /> }.into_any()
                } else {
                    view! {}.into_any()
                }
            }}
        </div>
    }
}
