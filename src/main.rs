//! ThreatLens - check URLs against a remote threat-analysis service
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use threatlens::LaunchOptions;
use threatlens_core::prelude::*;

/// ThreatLens - check URLs against a remote threat-analysis service
#[derive(Parser, Debug)]
#[command(name = "threatlens")]
#[command(about = "Detect phishing, malware, and malicious URLs from the terminal", long_about = None)]
struct Args {
    /// Analysis service base URL (default http://127.0.0.1:5000)
    #[arg(long, global = true, value_name = "URL")]
    server: Option<String>,

    /// Config file (default <config dir>/threatlens/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial screen: "/" or "/predict"
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Probe the service health endpoint at startup
    #[arg(long)]
    check_health: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one URL and print the verdict as JSON
    Check {
        /// URL to analyze, sent exactly as given
        url: String,
    },
    /// Check whether the analysis service is up
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let options = LaunchOptions {
        config: args.config,
        server: args.server,
        route: args.route,
        check_health: args.check_health,
    };

    match args.command {
        None => threatlens::run_tui(&options).await,
        Some(Command::Check { url }) => threatlens::run_check(&options, &url).await,
        Some(Command::Health) => threatlens::run_health(&options).await,
    }
}
