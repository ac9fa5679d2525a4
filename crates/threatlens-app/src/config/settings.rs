//! Settings file loading

use std::path::{Path, PathBuf};

use threatlens_core::prelude::*;

use super::types::Settings;

pub const CONFIG_SUBDIR: &str = "threatlens";
pub const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/threatlens/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_SUBDIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`default_config_path`] when `None`.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
