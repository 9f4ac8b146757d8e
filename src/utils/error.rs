//! Custom error types for lb-cert-tracker
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of certificate decoding, cloud enumeration,
//! configuration loading and report rendering.

use thiserror::Error;

/// Top-level error type for the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Certificate decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Cloud API error: {0}")]
    Gcp(#[from] GcpError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report generation error: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures turning a PEM body into a certificate expiry.
///
/// These never abort a scan: the record keeps the message and the
/// certificate is reported in the `ParseError` tier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("certificate body is empty")]
    Empty,

    #[error("malformed PEM armor: {message}")]
    Pem { message: String },

    #[error("expected a CERTIFICATE PEM block, found {label}")]
    NotACertificate { label: String },

    #[error("invalid X.509 structure: {message}")]
    Der { message: String },

    #[error("not-valid-after timestamp is out of range")]
    InvalidTimestamp,
}

/// Compute Engine API and credential errors
#[derive(Error, Debug)]
pub enum GcpError {
    #[error("No access token available: {message}")]
    Auth { message: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Unexpected response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {message}")]
    Serialize { message: String },

    #[error("Failed to read {path}: {message}")]
    ReadInput { path: String, message: String },
}

/// Result type alias using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;
