//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "THREATLENS_LOG";

const DEFAULT_FILTER: &str = "threatlens=info,warn";
const LOG_FILE_NAME: &str = "threatlens.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/threatlens/logs/` (platform data dir).
/// The terminal is owned by the TUI, so nothing is ever written to stdout/stderr.
/// Log level is controlled by the `THREATLENS_LOG` environment variable.
///
/// # Examples
/// ```bash
/// THREATLENS_LOG=debug threatlens
/// THREATLENS_LOG=threatlens_client=trace threatlens check https://example.com
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("ThreatLens {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Where the daily log files (`threatlens.log.YYYY-MM-DD`) are written
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("threatlens").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        assert!(log_directory().ends_with("threatlens/logs"));
    }
}
