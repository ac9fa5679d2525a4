//! Launch options: merge CLI flags over the config file
//!
//! Precedence is CLI flag > config file > built-in default.

use std::path::PathBuf;

use threatlens_app::config::{load_settings, Settings};
use threatlens_app::Route;
use threatlens_client::HttpAnalysisClient;
use threatlens_core::prelude::*;

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Explicit config file; must exist when given
    pub config: Option<PathBuf>,
    /// `--server`
    pub server: Option<String>,
    /// `--route`
    pub route: Option<String>,
    /// `--check-health`; only ever turns the probe on
    pub check_health: bool,
}

/// Settings and first route after applying overrides
#[derive(Debug, Clone)]
pub struct Launch {
    pub settings: Settings,
    pub route: Route,
}

impl LaunchOptions {
    /// Load settings and apply CLI overrides.
    ///
    /// Fails on a missing explicit config file or an unknown route.
    pub fn resolve(&self) -> Result<Launch> {
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(Error::ConfigNotFound { path: path.clone() });
            }
        }

        let mut settings = load_settings(self.config.as_deref());

        if let Some(server) = &self.server {
            settings.service.base_url = server.clone();
        }
        if self.check_health {
            settings.service.check_health = true;
        }
        if let Some(route) = &self.route {
            settings.ui.start_route = route.clone();
        }

        let route = Route::from_path(&settings.ui.start_route)?;

        Ok(Launch { settings, route })
    }
}

impl Launch {
    /// HTTP client for the configured service
    pub fn client(&self) -> Result<HttpAnalysisClient> {
        HttpAnalysisClient::new(
            &self.settings.service.base_url,
            self.settings.service.request_timeout(),
        )
    }
}
