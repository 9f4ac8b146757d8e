//! Data models for lb-cert-tracker
//!
//! This module contains the data structures shared by the decoder,
//! classifier, scanner and report renderers.

pub mod certificate;
pub mod report;
pub mod status;

pub use certificate::{CertificateRecord, CertificateType, Expiry};
pub use report::{ReportEntry, ReportSummary, ScanReport};
pub use status::StatusTier;
