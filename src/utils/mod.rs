//! Utility modules for lb-cert-tracker
//!
//! This module contains error types, progress indicators, and other utilities.

pub mod error;
pub mod progress;

pub use error::{ConfigError, DecodeError, GcpError, ReportError, Result, TrackerError};
