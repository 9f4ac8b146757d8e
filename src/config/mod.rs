//! Configuration module for lb-cert-tracker
//!
//! Handles loading settings from TOML files.

pub mod settings;

pub use settings::{GcpSettings, ScanSettings, Settings, DEFAULT_CONFIG_PATH};

use crate::utils::ConfigError;
use std::path::Path;

/// Load settings from an explicit path, or the default location when none is given
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => Settings::load_from_file(path),
        None => Settings::load_default(),
    }
}
