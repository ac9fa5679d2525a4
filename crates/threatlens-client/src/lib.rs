//! # threatlens-client - Remote Analysis Service Client
//!
//! Talks to the remote threat-analysis service: builds the `POST /predict`
//! request, validates the response body at the boundary, and maps every
//! failure onto [`ServiceError`].
//!
//! Depends on [`threatlens_core`] for the [`Verdict`](threatlens_core::Verdict)
//! domain type.
//!
//! ## Public API
//!
//! ### Service Contract
//! - [`AnalysisService`] - Async trait implemented by anything that can analyze a URL
//! - [`HttpAnalysisClient`] - reqwest-backed implementation for the real service
//!
//! ### Protocol
//! - [`PredictRequest`] - JSON request body (`{"url": ...}`)
//! - [`parse_predict_response()`] - Schema validation of a success body
//!
//! ### Errors
//! - [`ServiceError`] - `RequestFailed` vs `MalformedResponse`

pub mod error;
pub mod http;
pub mod protocol;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use error::ServiceError;
pub use http::{endpoint_url, HttpAnalysisClient, DEFAULT_BASE_URL};
pub use protocol::{
    parse_health_response, parse_predict_response, HealthResponse, PredictRequest, HEALTH_PATH,
    PREDICT_PATH,
};
pub use service::{AnalysisService, LocalAnalysisService};
