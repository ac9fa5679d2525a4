//! Wire format of the remote analysis service
//!
//! `POST /predict` takes `{"url": "<string>"}` and answers with a verdict
//! object. `GET /test` is a liveness probe answering
//! `{"message": "Backend is running"}`. Error responses carry
//! `{"error": "<text>"}`, which is only ever logged.

use serde::{Deserialize, Serialize};
use threatlens_core::prelude::*;
use threatlens_core::Verdict;

use crate::error::ServiceError;

/// Path of the analysis endpoint, relative to the service base URL
pub const PREDICT_PATH: &str = "predict";

/// Path of the liveness probe, relative to the service base URL
pub const HEALTH_PATH: &str = "test";

/// Request body for `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub url: String,
}

impl PredictRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Body of a successful `GET /test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Body the service sends alongside 4xx/5xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Best-effort extraction of the service's error text, for logging only.
pub fn parse_error_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
}

/// Validate a success body against the verdict schema.
///
/// Rejects bodies that are not JSON, lack a required field, carry a field of
/// the wrong type, or have an empty `url`/`verdict`. Optional descriptive
/// fields may be absent.
pub fn parse_predict_response(body: &[u8]) -> std::result::Result<Verdict, ServiceError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ServiceError::malformed(format!("response is not valid JSON ({e})")))?;

    if !value.is_object() {
        return Err(ServiceError::malformed("expected a JSON object"));
    }

    let verdict: Verdict =
        serde_json::from_value(value).map_err(|e| ServiceError::malformed(e.to_string()))?;

    if verdict.url.trim().is_empty() {
        return Err(ServiceError::malformed("field `url` is empty"));
    }
    if verdict.verdict.trim().is_empty() {
        return Err(ServiceError::malformed("field `verdict` is empty"));
    }

    trace!("Parsed verdict for {}: {}", verdict.url, verdict.verdict);
    Ok(verdict)
}

/// Validate a `GET /test` body, returning the service's status message.
pub fn parse_health_response(body: &[u8]) -> std::result::Result<String, ServiceError> {
    serde_json::from_slice::<HealthResponse>(body)
        .map(|r| r.message)
        .map_err(|e| ServiceError::malformed(e.to_string()))
}
