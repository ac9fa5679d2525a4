//! Test utilities for the analysis service
//!
//! Provides verdict builders and a scripted [`FakeAnalysisService`] that
//! records every submitted URL.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use threatlens_core::{FieldValue, Verdict};

use crate::error::ServiceError;
use crate::service::AnalysisService;

/// Creates a verdict with only the required fields set.
///
/// # Arguments
/// * `url` - Submitted address (the domain is derived naively from it)
/// * `probability` - Risk score
/// * `label` - Verdict label
pub fn test_verdict(url: &str, probability: f64, label: &str) -> Verdict {
    let domain = url
        .split("://")
        .nth(1)
        .unwrap_or(url)
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string();

    Verdict {
        url: url.to_string(),
        domain,
        probability: FieldValue::Float(probability),
        verdict: label.to_string(),
        features_detected: 1,
        total_features: 10,
        reasons: None,
        domain_age: None,
        http_status: None,
        spf_dmarc: None,
        free_hosted: None,
        parked_domain: None,
    }
}

/// The canonical `https://example.com` → "safe" verdict.
pub fn example_verdict() -> Verdict {
    test_verdict("https://example.com", 0.12, "safe")
}

/// A high-risk verdict with every descriptive field populated.
pub fn full_verdict() -> Verdict {
    Verdict {
        url: "http://secure-login.example.net/verify".to_string(),
        domain: "secure-login.example.net".to_string(),
        probability: FieldValue::Float(0.91),
        verdict: "🛑 HIGH RISK".to_string(),
        features_detected: 37,
        total_features: 116,
        reasons: Some("Missing HTTPS, Phishing-related keywords found".to_string()),
        domain_age: Some(FieldValue::from("1 years ago")),
        http_status: Some(FieldValue::Integer(200)),
        spf_dmarc: Some(FieldValue::from("Not found")),
        free_hosted: Some(FieldValue::from("No")),
        parked_domain: Some(FieldValue::from("Not Parked")),
    }
}

/// Scripted stand-in for the remote service.
///
/// Replies are consumed in order; once the script runs out, every request
/// gets `fallback`. Clones share the script and the request log.
#[derive(Debug, Clone)]
pub struct FakeAnalysisService {
    script: Arc<Mutex<VecDeque<Result<Verdict, ServiceError>>>>,
    fallback: Result<Verdict, ServiceError>,
    requests: Arc<Mutex<Vec<String>>>,
    healthy: bool,
}

impl Default for FakeAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeAnalysisService {
    /// A fake that answers every request with [`example_verdict`].
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Ok(example_verdict()),
            requests: Arc::new(Mutex::new(Vec::new())),
            healthy: true,
        }
    }

    /// A fake whose every request fails with `error`.
    pub fn failing(error: ServiceError) -> Self {
        Self {
            fallback: Err(error),
            healthy: false,
            ..Self::new()
        }
    }

    /// Queue a reply for the next unanswered request.
    pub fn push_reply(&self, reply: Result<Verdict, ServiceError>) {
        self.script
            .lock()
            .expect("fake service script poisoned")
            .push_back(reply);
    }

    /// Every URL submitted so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("fake service log poisoned")
            .clone()
    }
}

impl AnalysisService for FakeAnalysisService {
    async fn analyze(&self, url: &str) -> Result<Verdict, ServiceError> {
        self.requests
            .lock()
            .expect("fake service log poisoned")
            .push(url.to_string());

        let scripted = self
            .script
            .lock()
            .expect("fake service script poisoned")
            .pop_front();

        scripted.unwrap_or_else(|| self.fallback.clone())
    }

    async fn health(&self) -> Result<String, ServiceError> {
        if self.healthy {
            Ok("Backend is running".to_string())
        } else {
            Err(ServiceError::request_failed("Failed to fetch"))
        }
    }

    fn describe(&self) -> String {
        "fake://analysis-service".to_string()
    }
}
