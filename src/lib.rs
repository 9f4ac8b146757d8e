//! lb-cert-tracker Library
//!
//! Inventories TLS certificates bound to HTTPS load balancer proxies and
//! classifies how close each one is to expiry:
//! - PEM certificate decoding to a UTC not-valid-after timestamp
//! - Expiry classification into urgency tiers
//! - Compute Engine enumeration of Target HTTPS Proxies and certificates
//! - Table, plain and JSON reports
//!
//! # Usage
//!
//! ```rust,ignore
//! use lb_cert_tracker::certificate::{classify, decode};
//! use chrono::Utc;
//!
//! let pem = std::fs::read("cert.pem")?;
//! let tier = match decode(&pem) {
//!     Ok(not_after) => classify(false, Some(not_after), None, Utc::now()),
//!     Err(e) => classify(false, None, Some(&e.to_string()), Utc::now()),
//! };
//! println!("{}", tier);
//! ```

pub mod certificate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod gcp;
pub mod models;
pub mod output;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use certificate::{classify, decode, Thresholds};
pub use cli::Cli;
pub use config::Settings;
pub use models::{CertificateRecord, Expiry, ScanReport, StatusTier};
pub use scanner::{CertificateSource, Scanner};
pub use utils::{DecodeError, Result, TrackerError};
