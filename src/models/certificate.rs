//! Certificate inventory types

use crate::certificate::decode;
use crate::utils::DecodeError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Who owns a certificate's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateType {
    /// Issued and renewed by the platform
    Managed,
    /// PEM body uploaded and rotated by the owner
    SelfManaged,
}

impl CertificateType {
    /// Map the Compute API `type` field. Anything other than `MANAGED`
    /// (including a missing value) is treated as self-managed.
    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some("MANAGED") => CertificateType::Managed,
            _ => CertificateType::SelfManaged,
        }
    }

    pub fn is_managed(&self) -> bool {
        matches!(self, CertificateType::Managed)
    }
}

impl fmt::Display for CertificateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateType::Managed => write!(f, "Managed"),
            CertificateType::SelfManaged => write!(f, "Self-managed"),
        }
    }
}

/// Outcome of looking at a certificate's expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expiry {
    /// Managed certificates are never decoded
    NotEvaluated,
    /// Decoded not-valid-after timestamp
    NotValidAfter(DateTime<Utc>),
    /// Why the PEM body could not be decoded
    DecodeError(String),
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiry::NotEvaluated => write!(f, "-"),
            Expiry::NotValidAfter(ts) => write!(f, "{}", ts.to_rfc3339()),
            Expiry::DecodeError(message) => write!(f, "Error parsing cert: {}", message),
        }
    }
}

/// One certificate bound to one proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateRecord {
    /// Owning load balancer proxy
    pub proxy_name: String,
    /// Certificate resource name
    pub cert_name: String,
    pub cert_type: CertificateType,
    pub expiry: Expiry,
}

impl CertificateRecord {
    /// Record for a platform-managed certificate. The body is not inspected.
    pub fn managed(proxy_name: impl Into<String>, cert_name: impl Into<String>) -> Self {
        Self {
            proxy_name: proxy_name.into(),
            cert_name: cert_name.into(),
            cert_type: CertificateType::Managed,
            expiry: Expiry::NotEvaluated,
        }
    }

    /// Record for a self-managed certificate, decoding its PEM body.
    ///
    /// A missing body is recorded as a decode failure.
    pub fn self_managed(
        proxy_name: impl Into<String>,
        cert_name: impl Into<String>,
        pem_body: Option<&[u8]>,
    ) -> Self {
        Self::from_decoded(proxy_name, cert_name, decode(pem_body.unwrap_or_default()))
    }

    /// Record for a self-managed certificate whose body was already decoded
    pub fn from_decoded(
        proxy_name: impl Into<String>,
        cert_name: impl Into<String>,
        decoded: Result<DateTime<Utc>, DecodeError>,
    ) -> Self {
        let expiry = match decoded {
            Ok(not_after) => Expiry::NotValidAfter(not_after),
            Err(e) => Expiry::DecodeError(e.to_string()),
        };

        Self {
            proxy_name: proxy_name.into(),
            cert_name: cert_name.into(),
            cert_type: CertificateType::SelfManaged,
            expiry,
        }
    }

    /// Build a record from an API `type` value and optional PEM body
    pub fn from_parts(
        proxy_name: impl Into<String>,
        cert_name: impl Into<String>,
        cert_type: CertificateType,
        pem_body: Option<&[u8]>,
    ) -> Self {
        match cert_type {
            CertificateType::Managed => Self::managed(proxy_name, cert_name),
            CertificateType::SelfManaged => Self::self_managed(proxy_name, cert_name, pem_body),
        }
    }

    pub fn is_managed(&self) -> bool {
        self.cert_type.is_managed()
    }

    /// Decoded expiry, if this is a successfully decoded self-managed certificate
    pub fn not_valid_after(&self) -> Option<DateTime<Utc>> {
        match &self.expiry {
            Expiry::NotValidAfter(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Decode failure description, if any
    pub fn decode_error(&self) -> Option<&str> {
        match &self.expiry {
            Expiry::DecodeError(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CERT: &[u8] = include_bytes!("../../tests/fixtures/test-cert.pem");

    #[test]
    fn test_managed_ignores_body() {
        let record = CertificateRecord::from_parts(
            "proxy-a",
            "cert-a",
            CertificateType::Managed,
            Some(&b"garbage"[..]),
        );
        assert!(record.is_managed());
        assert_eq!(record.expiry, Expiry::NotEvaluated);
        assert!(record.decode_error().is_none());
        assert!(record.not_valid_after().is_none());
    }

    #[test]
    fn test_self_managed_decodes_body() {
        let record = CertificateRecord::self_managed("proxy-a", "cert-a", Some(TEST_CERT));
        assert!(record.not_valid_after().is_some());
        assert!(record.decode_error().is_none());
    }

    #[test]
    fn test_self_managed_without_body_is_decode_error() {
        let record = CertificateRecord::self_managed("proxy-a", "cert-a", None);
        assert!(record.not_valid_after().is_none());
        assert_eq!(record.decode_error(), Some("certificate body is empty"));
    }

    #[test]
    fn test_from_decoded_keeps_error_text() {
        let record = CertificateRecord::from_decoded("proxy-a", "cert-a", Err(DecodeError::Empty));
        assert!(!record.is_managed());
        assert_eq!(record.decode_error(), Some("certificate body is empty"));
    }

    #[test]
    fn test_type_from_api() {
        assert_eq!(CertificateType::from_api(Some("MANAGED")), CertificateType::Managed);
        assert_eq!(
            CertificateType::from_api(Some("SELF_MANAGED")),
            CertificateType::SelfManaged
        );
        assert_eq!(CertificateType::from_api(None), CertificateType::SelfManaged);
    }
}
