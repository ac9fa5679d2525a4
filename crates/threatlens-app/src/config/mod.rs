//! Configuration file parsing for ThreatLens
//!
//! Supports:
//! - `<config_dir>/threatlens/config.toml` - Global settings
//! - an explicit path given with `--config`

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, CONFIG_FILENAME, CONFIG_SUBDIR};
pub use types::*;
