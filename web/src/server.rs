use leptos::prelude::*;
use leptos::server;
use leptos::server_fn::codec::Json;
use shared_types::{AppointmentOutcome, AppointmentRequest, AvailabilityQuery, AvailabilityResponse};

#[cfg(feature = "ssr")]
use crate::error::BookingError;

#[cfg(feature = "ssr")]
fn into_server_error(err: BookingError) -> ServerFnError {
    if err.is_upstream() {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::BAD_GATEWAY);
        }
        tracing::error!("Booking backend call failed: {}", err);
    } else {
        tracing::warn!("Rejected booking call: {}", err);
    }
    ServerFnError::new(err.to_string())
}

#[server]
pub async fn check_availability(
    query: AvailabilityQuery,
) -> Result<AvailabilityResponse, ServerFnError> {
    let client = crate::backend::backend().map_err(into_server_error)?;
    client
        .check_availability(&query)
        .await
        .map_err(into_server_error)
}

/// Books every request in order and reports each one. A failed booking does
/// not stop the rest of the batch.
#[server(input = Json)]
pub async fn submit_appointments(
    requests: Vec<AppointmentRequest>,
) -> Result<Vec<AppointmentOutcome>, ServerFnError> {
    if requests.is_empty() {
        return Err(into_server_error(BookingError::NothingToSubmit));
    }

    let client = crate::backend::backend().map_err(into_server_error)?;
    let mut outcomes = Vec::with_capacity(requests.len());
    for request in &requests {
        let result = client.create_appointment(request).await.map_err(|e| {
            tracing::warn!("Booking slot {} failed: {}", request.id, e);
            format!("slot {}: {}", request.id, e)
        });
        outcomes.push(AppointmentOutcome {
            slot_id: request.id,
            result,
        });
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    tracing::info!(
        "Booked {} of {} appointments",
        outcomes.len() - failed,
        outcomes.len()
    );
    Ok(outcomes)
}
