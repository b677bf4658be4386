use serde::{Deserialize, Serialize};

/// One bookable interval for one medic, as reported by the availability API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: i64,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MedicAvailability {
    pub medic_id: i64,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub available_slots: Vec<MedicAvailability>,
}

impl AvailabilityResponse {
    /// Every slot of every medic, in response order.
    pub fn all_slots(&self) -> Vec<Slot> {
        self.available_slots
            .iter()
            .flat_map(|medic| medic.slots.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeRangeFilter {
    #[default]
    Any,
    Morning,
    Afternoon,
}

impl TimeRangeFilter {
    pub const ALL: [TimeRangeFilter; 3] = [
        TimeRangeFilter::Any,
        TimeRangeFilter::Morning,
        TimeRangeFilter::Afternoon,
    ];

    /// Value sent as `time_range_filter`; `Any` sends an empty string.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            TimeRangeFilter::Any => "",
            TimeRangeFilter::Morning => "morning",
            TimeRangeFilter::Afternoon => "afternoon",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRangeFilter::Any => "Any time",
            TimeRangeFilter::Morning => "Morning",
            TimeRangeFilter::Afternoon => "Afternoon",
        }
    }

    pub fn from_query_value(value: &str) -> Self {
        match value {
            "morning" => TimeRangeFilter::Morning,
            "afternoon" => TimeRangeFilter::Afternoon,
            _ => TimeRangeFilter::Any,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AvailabilityQuery {
    pub region: String,
    pub comuna: String,
    pub area: String,
    pub specialty: String,
    pub time_range_filter: TimeRangeFilter,
}

impl AvailabilityQuery {
    /// Query parameters in the order the availability endpoint documents them.
    pub fn params(&self) -> [(&'static str, &str); 5] {
        [
            ("region", self.region.as_str()),
            ("comuna", self.comuna.as_str()),
            ("area", self.area.as_str()),
            ("specialty", self.specialty.as_str()),
            ("time_range_filter", self.time_range_filter.as_query_value()),
        ]
    }
}

/// Body of `POST /appointments/`. `id` is the id of the slot being booked.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub id: i64,
    pub patient_id: i64,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AppointmentConfirmation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub medic_id: Option<i64>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of booking one slot within a batch; failures carry the error text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppointmentOutcome {
    pub slot_id: i64,
    pub result: Result<AppointmentConfirmation, String>,
}
