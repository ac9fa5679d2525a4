//! Analysis service contract
//!
//! The TUI event loop and the headless commands both go through this trait,
//! so tests can swap the HTTP client for a scripted fake.

use threatlens_core::Verdict;

use crate::error::ServiceError;

/// Something that can analyze a URL and report the service's liveness.
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Submit `url` for analysis. Exactly one request is issued per call.
    async fn analyze(&self, url: &str) -> Result<Verdict, ServiceError>;

    /// Probe the service, returning its status message.
    async fn health(&self) -> Result<String, ServiceError>;

    /// Human-readable location of the service, for display and logs.
    fn describe(&self) -> String;
}
