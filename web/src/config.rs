use shared_types::AvailabilityQuery;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_BASE_VER: &str = "/api/v1";

/// Location of the external scheduling backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    base_version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_API_BASE_VER)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, base_version: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let base_version = base_version.into();
        let base_version = format!("/{}", base_version.trim_matches('/'));
        Self {
            base_url,
            base_version,
        }
    }

    /// Reads `API_BASE_URL` / `API_BASE_VER`, accepting the `VITE_` prefixed
    /// names the older frontends used.
    pub fn from_env() -> Self {
        let lookup = |name: &str| {
            std::env::var(name)
                .or_else(|_| std::env::var(format!("VITE_{}", name)))
                .ok()
                .filter(|value| !value.trim().is_empty())
        };

        Self::new(
            lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            lookup("API_BASE_VER").unwrap_or_else(|| DEFAULT_API_BASE_VER.to_string()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn base_version(&self) -> &str {
        &self.base_version
    }

    pub fn availability_check_url(&self) -> String {
        format!("{}{}/availability/check/", self.base_url, self.base_version)
    }

    pub fn appointments_url(&self) -> String {
        format!("{}{}/appointments/", self.base_url, self.base_version)
    }

    /// Availability endpoint with the search filters encoded as query string.
    pub fn availability_query_url(&self, query: &AvailabilityQuery) -> String {
        let encoded = query
            .params()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.availability_check_url(), encoded)
    }
}
