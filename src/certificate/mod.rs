//! Certificate decoding and expiry classification
//!
//! The pure core of the tracker: no I/O, safe to call from any thread.

pub mod classifier;
pub mod decoder;

pub use classifier::{classify, classify_record, days_left, Thresholds};
pub use decoder::{decode, decode_details, CertificateDetails};
