//! OAuth2 access token resolution
//!
//! Tokens come from, in order: an explicit value, the configured environment
//! variable, or `gcloud auth print-access-token`.

use crate::utils::GcpError;
use std::fmt;
use tokio::process::Command;
use tracing::debug;

/// Bearer token for the Compute Engine API. `Debug` never prints the secret.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Result<Self, GcpError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(GcpError::Auth {
                message: "access token is empty".to_string(),
            });
        }
        Ok(Self(token))
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(****)")
    }
}

/// Resolve an access token without touching global credential state
pub async fn resolve_token(explicit: Option<&str>, token_env: &str) -> Result<AccessToken, GcpError> {
    if let Some(token) = explicit {
        debug!("Using access token from command line");
        return AccessToken::new(token);
    }

    if let Ok(token) = std::env::var(token_env) {
        if !token.trim().is_empty() {
            debug!(env = token_env, "Using access token from environment");
            return AccessToken::new(token);
        }
    }

    debug!("Requesting access token from gcloud");
    gcloud_token().await
}

async fn gcloud_token() -> Result<AccessToken, GcpError> {
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .await
        .map_err(|e| GcpError::Auth {
            message: format!("failed to run gcloud: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GcpError::Auth {
            message: format!("gcloud auth print-access-token failed: {}", stderr.trim()),
        });
    }

    AccessToken::new(String::from_utf8_lossy(&output.stdout).into_owned())
}
