//! PEM certificate decoding
//!
//! Turns an uploaded PEM body into its not-valid-after timestamp using
//! `pem` for the armor and x509-parser for the DER structure.

use crate::utils::DecodeError;
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use x509_parser::prelude::*;

/// Fields shown when inspecting a certificate file
#[derive(Debug, Clone, Serialize)]
pub struct CertificateDetails {
    pub subject: String,
    pub issuer: String,
    /// Colon-separated hex serial number
    pub serial: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    /// DNS names from the Subject Alternative Name extension
    pub dns_names: Vec<String>,
    /// SHA-256 of the DER encoding, colon-separated uppercase hex
    pub fingerprint_sha256: String,
}

/// Decode a PEM certificate and return its not-valid-after time in UTC.
///
/// Any byte sequence is accepted. Empty input, broken armor, a non-certificate
/// PEM block, or an invalid X.509 body all come back as a [`DecodeError`].
pub fn decode(pem: &[u8]) -> Result<DateTime<Utc>, DecodeError> {
    let der = pem_to_der(pem)?;
    let cert = parse_der(&der)?;
    asn1_time_to_datetime(cert.validity().not_after)
}

/// Decode a PEM certificate into the fields shown by `inspect`
pub fn decode_details(pem: &[u8]) -> Result<CertificateDetails, DecodeError> {
    let der = pem_to_der(pem)?;
    let cert = parse_der(&der)?;

    let mut dns_names = Vec::new();
    if let Ok(Some(san_ext)) = cert.subject_alternative_name() {
        for name in &san_ext.value.general_names {
            if let GeneralName::DNSName(dns) = name {
                dns_names.push(dns.to_string());
            }
        }
    }

    Ok(CertificateDetails {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        serial: cert.raw_serial_as_string(),
        not_before: asn1_time_to_datetime(cert.validity().not_before)?,
        not_after: asn1_time_to_datetime(cert.validity().not_after)?,
        dns_names,
        fingerprint_sha256: fingerprint(&der),
    })
}

/// PEM labels accepted as an X.509 certificate
const CERTIFICATE_TAGS: [&str; 2] = ["CERTIFICATE", "X509 CERTIFICATE"];

/// Strip the PEM armor from the first certificate block, skipping any
/// blocks (keys, parameters) in front of it
fn pem_to_der(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }

    let blocks = ::pem::parse_many(data).map_err(|e| DecodeError::Pem {
        message: e.to_string(),
    })?;

    let first_label = match blocks.first() {
        Some(block) => block.tag().to_string(),
        None => {
            return Err(DecodeError::Pem {
                message: "no PEM block found".to_string(),
            })
        }
    };

    blocks
        .into_iter()
        .find(|block| CERTIFICATE_TAGS.contains(&block.tag()))
        .map(|block| block.into_contents())
        .ok_or(DecodeError::NotACertificate { label: first_label })
}

fn parse_der(der: &[u8]) -> Result<X509Certificate<'_>, DecodeError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| DecodeError::Der {
        message: e.to_string(),
    })?;
    Ok(cert)
}

/// Convert ASN.1 time to chrono DateTime.
///
/// Both UTCTime and GeneralizedTime are Zulu in RFC 5280 certificates, so
/// the Unix timestamp is already UTC.
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, DecodeError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or(DecodeError::InvalidTimestamp)
}

fn fingerprint(der: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(der);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CERT: &[u8] = include_bytes!("../../tests/fixtures/test-cert.pem");
    const TEST_KEY: &[u8] = include_bytes!("../../tests/fixtures/test-key.pem");

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(decode(b"  \n\t"), Err(DecodeError::Empty));
    }

    #[test]
    fn test_private_key_is_rejected() {
        assert_eq!(
            decode(TEST_KEY),
            Err(DecodeError::NotACertificate {
                label: "EC PRIVATE KEY".to_string()
            })
        );
    }

    #[test]
    fn test_text_without_armor_is_pem_error() {
        assert!(matches!(
            decode(b"this is not a certificate"),
            Err(DecodeError::Pem { .. })
        ));
    }

    #[test]
    fn test_bad_der_inside_valid_armor() {
        let pem = b"-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";
        assert!(matches!(decode(pem), Err(DecodeError::Der { .. })));
    }

    #[test]
    fn test_details_fingerprint_format() {
        let details = decode_details(TEST_CERT).unwrap();
        assert_eq!(details.fingerprint_sha256.len(), 32 * 3 - 1);
        assert!(details
            .fingerprint_sha256
            .chars()
            .all(|c| c == ':' || c.is_ascii_hexdigit()));
    }
}
