//! Errors surfaced by the analysis service client

use thiserror::Error;

/// Detail used for every non-2xx response; status codes are not distinguished.
pub const FAILED_TO_FETCH: &str = "Failed to fetch";

/// Failure of a single analysis request.
///
/// The `Display` text is exactly what the detector view shows inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Network-level failure or a non-success HTTP status
    #[error("Failed to connect to the server: {detail}")]
    RequestFailed { detail: String },

    /// Success status, but the body does not match the verdict schema
    #[error("Malformed response from the server: {detail}")]
    MalformedResponse { detail: String },
}

impl ServiceError {
    pub fn request_failed(detail: impl Into<String>) -> Self {
        Self::RequestFailed {
            detail: detail.into(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
        }
    }

    /// Message shown to the user in place of the loading indicator
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ServiceError::MalformedResponse { .. })
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::request_failed("request timed out")
        } else if err.is_decode() {
            ServiceError::malformed(err.to_string())
        } else {
            ServiceError::request_failed(err.to_string())
        }
    }
}

impl From<ServiceError> for threatlens_core::Error {
    fn from(err: ServiceError) -> Self {
        threatlens_core::Error::service(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        let err = ServiceError::request_failed(FAILED_TO_FETCH);
        assert_eq!(
            err.user_message(),
            "Failed to connect to the server: Failed to fetch"
        );
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_malformed_message_is_distinct() {
        let err = ServiceError::malformed("missing field `verdict`");
        assert!(err.is_malformed());
        assert!(err.user_message().starts_with("Malformed response"));
        assert!(!err.user_message().contains("Failed to connect"));
    }

    #[test]
    fn test_into_core_error_is_recoverable() {
        let err: threatlens_core::Error = ServiceError::request_failed("refused").into();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("refused"));
    }
}
