use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("could not reach the booking service: {0}")]
    Request(String),

    #[error("booking service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response from the booking service: {0}")]
    Decode(String),

    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("there are no confirmed appointments to send")]
    NothingToSubmit,

    #[error("backend client not initialized")]
    NotInitialized,

    #[error("backend client already initialized")]
    AlreadyInitialized,
}

impl BookingError {
    /// Failures caused by the external backend rather than by this app.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            BookingError::Request(_) | BookingError::Status { .. } | BookingError::Decode(_)
        )
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for BookingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BookingError::Decode(err.to_string())
        } else {
            BookingError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_backend_text() {
        let err = BookingError::Status {
            status: 409,
            body: "slot already taken".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "booking service answered 409: slot already taken"
        );
        assert!(err.is_upstream());
        assert!(!BookingError::NothingToSubmit.is_upstream());
        assert!(!BookingError::AlreadyInitialized.is_upstream());
    }
}
