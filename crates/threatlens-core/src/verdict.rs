//! Verdict domain model
//!
//! A [`Verdict`] is the structured risk assessment the remote analysis service
//! returns for a submitted URL. It is received once, displayed, and dropped;
//! nothing in the client mutates it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Probability above which a URL is considered high risk
pub const HIGH_RISK_THRESHOLD: f64 = 0.75;

/// Probability above which a URL is considered suspicious
pub const SUSPICIOUS_THRESHOLD: f64 = 0.5;

/// A scalar response field displayed exactly as the service formatted it.
///
/// The service is loose about types: `probability` may arrive as `0.12` or
/// `"0.12"`, and `http_status` is either an integer status code or `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value, if it has one.
    ///
    /// Text is parsed leniently (surrounding whitespace is ignored), so a
    /// probability sent as `"0.87"` still classifies.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Bool(_) => None,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

/// Display bucket for a verdict, using the service's own thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    /// Probability above 0.75
    HighRisk,
    /// Probability above 0.5
    Suspicious,
    /// Probability at or below 0.5
    LikelySafe,
    /// Probability missing or not numeric
    Unknown,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability.is_nan() {
            RiskLevel::Unknown
        } else if probability > HIGH_RISK_THRESHOLD {
            RiskLevel::HighRisk
        } else if probability > SUSPICIOUS_THRESHOLD {
            RiskLevel::Suspicious
        } else {
            RiskLevel::LikelySafe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::HighRisk => "High risk",
            RiskLevel::Suspicious => "Suspicious",
            RiskLevel::LikelySafe => "Likely safe",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

/// The service's response to a URL submission.
///
/// Required fields must be present for the response to be accepted; the
/// descriptive fields after `total_features` are optional and may be absent
/// or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The submitted address, echoed back by the service
    pub url: String,
    /// Host extracted from the URL
    pub domain: String,
    /// Risk score, usually a float rounded to two decimals
    pub probability: FieldValue,
    /// Verdict label, e.g. "safe" or "🛑 HIGH RISK"
    pub verdict: String,
    pub features_detected: u32,
    pub total_features: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasons: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_age: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spf_dmarc: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_hosted: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parked_domain: Option<FieldValue>,
}

impl Verdict {
    /// Risk bucket for colouring; the `verdict` label is always shown verbatim.
    pub fn risk_level(&self) -> RiskLevel {
        self.probability
            .as_f64()
            .map(RiskLevel::from_probability)
            .unwrap_or(RiskLevel::Unknown)
    }

    /// `detected/total`, as shown next to "Features Detected"
    pub fn features_summary(&self) -> String {
        format!("{}/{}", self.features_detected, self.total_features)
    }

    /// Descriptive fields in display order, paired with their labels.
    pub fn detail_fields(&self) -> [(&'static str, Option<String>); 6] {
        [
            ("Reasons", self.reasons.clone()),
            ("Domain Age", self.domain_age.as_ref().map(ToString::to_string)),
            (
                "HTTP Status Code",
                self.http_status.as_ref().map(ToString::to_string),
            ),
            (
                "SPF/DMARC Record",
                self.spf_dmarc.as_ref().map(ToString::to_string),
            ),
            (
                "Free Hosted Content",
                self.free_hosted.as_ref().map(ToString::to_string),
            ),
            (
                "Parked Domain",
                self.parked_domain.as_ref().map(ToString::to_string),
            ),
        ]
    }
}
