use chrono::NaiveDate;
use shared_types::{AppointmentConfirmation, AppointmentOutcome, AppointmentRequest, Slot};

use super::ConfirmedSelections;
use crate::calendar::slot_day_and_hours;
use crate::error::BookingError;

/// The backend expects millisecond precision on appointment timestamps.
fn with_millis(timestamp: &str) -> String {
    if timestamp.contains('.') {
        timestamp.to_string()
    } else {
        format!("{}.000", timestamp)
    }
}

/// A request about to be sent, together with the selection it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAppointment {
    pub day: NaiveDate,
    pub hours: String,
    pub request: AppointmentRequest,
}

/// Maps every confirmed (day, hour range) back to the slot it came from.
/// Selections with no matching slot are logged and dropped.
pub fn build_appointment_requests(
    selections: &ConfirmedSelections,
    slots: &[Slot],
    patient_id: i64,
) -> Vec<PendingAppointment> {
    selections
        .iter()
        .filter_map(|(day, hours_label)| {
            let slot = slots.iter().find(|slot| match slot_day_and_hours(slot) {
                Ok((slot_day, hours)) => slot_day == day && hours.label() == hours_label,
                Err(_) => false,
            });

            match slot {
                Some(slot) => Some(PendingAppointment {
                    day,
                    hours: hours_label.to_string(),
                    request: AppointmentRequest {
                        id: slot.id,
                        patient_id,
                        start_time: with_millis(&slot.start_time),
                        end_time: with_millis(&slot.end_time),
                    },
                }),
                None => {
                    leptos::logging::warn!("No slot matches {} {}", day, hours_label);
                    None
                }
            }
        })
        .collect()
}

/// Builds the payloads to POST. Errors with `NothingToSubmit` instead of
/// returning an empty batch so callers never reach the network for it.
pub fn prepare_submission(
    selections: &ConfirmedSelections,
    slots: &[Slot],
    patient_id: i64,
) -> Result<Vec<PendingAppointment>, BookingError> {
    if selections.is_empty() {
        return Err(BookingError::NothingToSubmit);
    }
    let pending = build_appointment_requests(selections, slots, patient_id);
    if pending.is_empty() {
        return Err(BookingError::NothingToSubmit);
    }
    Ok(pending)
}

/// What a batch submission achieved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub booked: Vec<AppointmentConfirmation>,
    pub failed: Vec<String>,
}

impl BatchReport {
    pub fn all_booked(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn describe(&self) -> String {
        let booked = if self.booked.is_empty() {
            "No appointments were booked.".to_string()
        } else {
            describe_confirmations(&self.booked)
        };
        match self.failed.len() {
            0 => booked,
            n => format!(
                "{} {} could not be booked and stay selected: {}",
                booked,
                n,
                self.failed.join("; ")
            ),
        }
    }
}

/// Drops the selections the backend booked; failed ones stay so they can be resent.
pub fn apply_outcomes(
    selections: &mut ConfirmedSelections,
    pending: &[PendingAppointment],
    outcomes: Vec<AppointmentOutcome>,
) -> BatchReport {
    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome.result {
            Ok(confirmation) => {
                if let Some(sent) = pending.iter().find(|p| p.request.id == outcome.slot_id) {
                    selections.remove(sent.day, &sent.hours);
                }
                report.booked.push(confirmation);
            }
            Err(message) => report.failed.push(message),
        }
    }
    report
}

/// Success text shown once the backend accepted appointments.
pub fn describe_confirmations(confirmations: &[AppointmentConfirmation]) -> String {
    let references = confirmations
        .iter()
        .filter_map(|c| {
            c.id.map(|id| match c.status.as_deref() {
                Some(status) => format!("#{} ({})", id, status),
                None => format!("#{}", id),
            })
        })
        .collect::<Vec<_>>();

    let booked = match confirmations.len() {
        1 => "1 appointment booked".to_string(),
        n => format!("{} appointments booked", n),
    };
    if references.is_empty() {
        format!("{}.", booked)
    } else {
        format!("{}: {}.", booked, references.join(", "))
    }
}
