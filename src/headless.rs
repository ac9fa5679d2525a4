//! Headless one-shot commands
//!
//! `check` submits a single URL and prints the verdict as pretty JSON on
//! stdout; `health` probes the service. Both exit non-zero on failure, and
//! diagnostics go to the log file rather than stdout.

use std::io::Write;

use threatlens_client::AnalysisService;
use threatlens_core::prelude::*;

/// Submit `url` and write the verdict to `out` as pretty JSON
pub async fn run_check<S, W>(service: &S, url: &str, out: &mut W) -> Result<()>
where
    S: AnalysisService,
    W: Write,
{
    info!("Headless check of {} via {}", url, service.describe());

    let verdict = service.analyze(url).await.map_err(|e| {
        error!("Check failed: {}", e);
        Error::from(e)
    })?;

    info!(
        "Verdict for {}: {} ({})",
        verdict.url,
        verdict.verdict,
        verdict.risk_level().label()
    );

    let json = serde_json::to_string_pretty(&verdict)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

/// Probe the service and write its status message to `out`
pub async fn run_health<S, W>(service: &S, out: &mut W) -> Result<()>
where
    S: AnalysisService,
    W: Write,
{
    let message = service.health().await.context("Health probe failed")?;

    writeln!(out, "{}: {}", service.describe(), message)?;
    Ok(())
}
