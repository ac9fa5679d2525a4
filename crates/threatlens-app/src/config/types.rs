//! Configuration types for ThreatLens
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ServiceSettings` / `UiSettings` - per-section settings
//! - `IconMode`

use std::time::Duration;

use serde::{Deserialize, Serialize};
use threatlens_client::DEFAULT_BASE_URL;

/// Global settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote analysis service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Base URL; `/predict` and `/test` are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds, 0 for none
    #[serde(default)]
    pub request_timeout_ms: u64,

    /// Probe `/test` when the TUI starts
    #[serde(default)]
    pub check_health: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: 0,
            check_health: false,
        }
    }
}

impl ServiceSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Icon rendering mode.
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Route shown at startup: "/" or "/predict"
    #[serde(default = "default_start_route")]
    pub start_route: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            start_route: default_start_route(),
        }
    }
}

fn default_start_route() -> String {
    "/".to_string()
}
