//! ThreatLens Library
//!
//! A terminal client for a remote URL threat-analysis service. The binary
//! is a thin clap wrapper over the entry points here.

pub mod headless;
pub mod launch;

pub use launch::{Launch, LaunchOptions};

use threatlens_core::prelude::*;

/// Run the interactive TUI
pub async fn run_tui(options: &LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    threatlens_core::logging::init()?;

    let launch = options.resolve()?;
    let client = launch.client()?;

    let result = threatlens_tui::run(launch.settings, launch.route, client).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    result
}

/// Analyze one URL without the TUI, printing the verdict to stdout
pub async fn run_check(options: &LaunchOptions, url: &str) -> Result<()> {
    threatlens_core::logging::init()?;
    let client = options.resolve()?.client()?;
    headless::run_check(&client, url, &mut std::io::stdout().lock()).await
}

/// Probe the service health endpoint, printing its status to stdout
pub async fn run_health(options: &LaunchOptions) -> Result<()> {
    threatlens_core::logging::init()?;
    let client = options.resolve()?.client()?;
    headless::run_health(&client, &mut std::io::stdout().lock()).await
}
