//! HTTP implementation of the analysis service

use std::time::Duration;

use reqwest::Client;
use threatlens_core::prelude::*;
use threatlens_core::Verdict;
use url::Url;

use crate::error::{ServiceError, FAILED_TO_FETCH};
use crate::protocol::{
    parse_error_body, parse_health_response, parse_predict_response, PredictRequest, HEALTH_PATH,
    PREDICT_PATH,
};
use crate::service::AnalysisService;

/// Where the service listens when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Resolve `path` against the service base URL.
///
/// The base is treated as a directory, so `http://host/api` + `predict`
/// resolves to `http://host/api/predict` rather than `http://host/predict`.
pub fn endpoint_url(base: &Url, path: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.set_query(None);
    base.set_fragment(None);
    base.join(path)
        .map_err(|e| Error::invalid_server_url(base.as_str(), e.to_string()))
}

/// reqwest-backed client for the remote analysis service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: Url,
    predict_url: Url,
    health_url: Url,
    timeout: Option<Duration>,
}

impl HttpAnalysisClient {
    /// Build a client for the service at `base_url`.
    ///
    /// Fails if the URL does not parse or is not http(s). `timeout` of `None`
    /// lets a request wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url.trim())
            .map_err(|e| Error::invalid_server_url(base_url, e.to_string()))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::invalid_server_url(
                base_url,
                format!("unsupported scheme '{}'", base.scheme()),
            ));
        }

        let predict_url = endpoint_url(&base, PREDICT_PATH)?;
        let health_url = endpoint_url(&base, HEALTH_PATH)?;

        debug!(
            "Analysis service at {} (timeout: {:?})",
            predict_url, timeout
        );

        Ok(Self {
            client: Client::new(),
            base_url: base,
            predict_url,
            health_url,
            timeout,
        })
    }

    fn with_timeout(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, url: &str) -> std::result::Result<Verdict, ServiceError> {
        info!("Submitting {} for analysis", url);

        let request = self
            .client
            .post(self.predict_url.clone())
            .json(&PredictRequest::new(url));

        let response = self.with_timeout(request).send().await.map_err(|e| {
            warn!("Analysis request for {} failed: {}", url, e);
            ServiceError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            match parse_error_body(&body) {
                Some(reason) => warn!("Service answered {} for {}: {}", status, url, reason),
                None => warn!("Service answered {} for {}", status, url),
            }
            return Err(ServiceError::request_failed(FAILED_TO_FETCH));
        }

        let body = response.bytes().await.map_err(ServiceError::from)?;
        let verdict = parse_predict_response(&body).inspect_err(|e| {
            warn!("Rejected response for {}: {}", url, e);
        })?;

        if verdict.url != url {
            debug!("Service echoed {} for submitted {}", verdict.url, url);
        }

        info!("Verdict for {}: {}", url, verdict.verdict);
        Ok(verdict)
    }

    async fn health(&self) -> std::result::Result<String, ServiceError> {
        let request = self.client.get(self.health_url.clone());
        let response = self.with_timeout(request).send().await?;

        if !response.status().is_success() {
            warn!("Health probe answered {}", response.status());
            return Err(ServiceError::request_failed(FAILED_TO_FETCH));
        }

        let body = response.bytes().await?;
        parse_health_response(&body)
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}
