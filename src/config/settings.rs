//! Application settings configuration
//!
//! Defines expiry thresholds, Compute API access and scan concurrency.

use crate::certificate::Thresholds;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default location checked by [`Settings::load_default`]
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Compute Engine API settings
#[derive(Debug, Clone, Deserialize)]
pub struct GcpSettings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Environment variable holding a pre-issued OAuth2 access token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_api_base() -> String {
    "https://compute.googleapis.com/compute/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_token_env() -> String {
    "GOOGLE_OAUTH_ACCESS_TOKEN".to_string()
}

impl Default for GcpSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout(),
            token_env: default_token_env(),
        }
    }
}

impl GcpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Scan settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// Certificate resources fetched concurrently
    #[serde(default = "default_parallel")]
    pub parallel: usize,
}

fn default_parallel() -> usize {
    4
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub gcp: GcpSettings,
    #[serde(default)]
    pub scan: ScanSettings,
}

impl Settings {
    /// Load settings from the default config file, falling back to defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new(DEFAULT_CONFIG_PATH);
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        if self.scan.parallel == 0 {
            return Err(ConfigError::InvalidValue {
                key: "scan.parallel".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.gcp.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "gcp.timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
