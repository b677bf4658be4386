//! HTTP client for the external scheduling API. Only compiled into the server.

use std::sync::OnceLock;

use reqwest::header::ACCEPT;
use shared_types::{AppointmentConfirmation, AppointmentRequest, AvailabilityQuery, AvailabilityResponse};

use crate::config::ApiConfig;
use crate::error::BookingError;

static BACKEND: OnceLock<BackendClient> = OnceLock::new();

pub fn init_backend(config: ApiConfig) -> Result<(), BookingError> {
    tracing::info!(
        base_url = config.base_url(),
        version = config.base_version(),
        "Using booking backend"
    );
    BACKEND
        .set(BackendClient::new(config))
        .map_err(|_| BookingError::AlreadyInitialized)
}

pub fn backend() -> Result<&'static BackendClient, BookingError> {
    BACKEND.get().ok_or(BookingError::NotInitialized)
}

pub struct BackendClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl BackendClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AvailabilityResponse, BookingError> {
        let url = self.config.availability_query_url(query);
        tracing::debug!(%url, "Checking availability");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let availability = response.json::<AvailabilityResponse>().await?;

        tracing::info!(
            medics = availability.available_slots.len(),
            slots = availability.all_slots().len(),
            "Availability received"
        );
        Ok(availability)
    }

    pub async fn create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<AppointmentConfirmation, BookingError> {
        let url = self.config.appointments_url();
        tracing::debug!(%url, slot_id = request.id, "Creating appointment");

        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let confirmation = response.json::<AppointmentConfirmation>().await?;

        tracing::info!(slot_id = request.id, appointment_id = ?confirmation.id, "Appointment created");
        Ok(confirmation)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BookingError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), %body, "Booking backend returned an error");
    Err(BookingError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::TimeRangeFilter;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(ApiConfig::new(server.uri(), "/api/v1"))
    }

    fn santiago_query() -> AvailabilityQuery {
        AvailabilityQuery {
            region: "13".into(),
            comuna: "Santiago".into(),
            area: "3".into(),
            specialty: "trauma".into(),
            time_range_filter: TimeRangeFilter::Morning,
        }
    }

    fn request() -> AppointmentRequest {
        AppointmentRequest {
            id: 41,
            patient_id: 7,
            start_time: "2025-02-26T09:00:00.000".into(),
            end_time: "2025-02-26T10:00:00.000".into(),
        }
    }

    #[tokio::test]
    async fn availability_is_fetched_as_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/availability/check/"))
            .and(header("accept", "application/json"))
            .and(query_param("region", "13"))
            .and(query_param("time_range_filter", "morning"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "available_slots": [
                    {"medic_id": 2, "slots": [
                        {"id": 20, "start_time": "2025-02-27T11:00:00", "end_time": "2025-02-27T11:30:00"}
                    ]}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let availability = client_for(&mock_server)
            .check_availability(&santiago_query())
            .await
            .unwrap();
        let ids: Vec<i64> = availability.all_slots().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![20]);
    }

    #[tokio::test]
    async fn rejected_booking_keeps_status_and_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/appointments/"))
            .and(header("accept", "application/json"))
            .and(body_json(serde_json::json!({
                "id": 41,
                "patient_id": 7,
                "start_time": "2025-02-26T09:00:00.000",
                "end_time": "2025-02-26T10:00:00.000"
            })))
            .respond_with(ResponseTemplate::new(409).set_body_string("slot already taken"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .create_appointment(&request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::Status {
                status: 409,
                body: "slot already taken".to_string(),
            }
        );
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/appointments/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .create_appointment(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn booking_returns_the_confirmation() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/appointments/"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"id": 5, "status": "pending"})),
            )
            .mount(&mock_server)
            .await;

        let confirmation = client_for(&mock_server)
            .create_appointment(&request())
            .await
            .unwrap();
        assert_eq!(confirmation.id, Some(5));
        assert_eq!(confirmation.status.as_deref(), Some("pending"));
    }

    #[test]
    fn second_init_is_reported_as_already_initialized() {
        let _ = init_backend(ApiConfig::default());
        assert_eq!(
            init_backend(ApiConfig::new("http://other:9000", "v2")),
            Err(BookingError::AlreadyInitialized)
        );
        assert!(backend().is_ok());
    }
}
