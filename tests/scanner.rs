use lb_cert_tracker::gcp::{SslCertificate, TargetHttpsProxy};
use lb_cert_tracker::models::Expiry;
use lb_cert_tracker::utils::GcpError;
use lb_cert_tracker::{CertificateSource, Scanner};
use std::collections::HashMap;

const TEST_CERT: &str = include_str!("fixtures/test-cert.pem");
const LINK: &str = "https://compute.googleapis.com/compute/v1/projects/demo/global/sslCertificates/";

/// In-memory inventory standing in for the Compute API
#[derive(Default)]
struct FakeSource {
    proxies: Vec<TargetHttpsProxy>,
    certificates: HashMap<String, SslCertificate>,
}

impl FakeSource {
    fn proxy(mut self, name: &str, certs: &[&str]) -> Self {
        self.proxies.push(TargetHttpsProxy {
            name: name.to_string(),
            ssl_certificates: certs.iter().map(|c| format!("{}{}", LINK, c)).collect(),
        });
        self
    }

    fn cert(mut self, name: &str, cert_type: &str, body: Option<&str>) -> Self {
        self.certificates.insert(
            format!("{}{}", LINK, name),
            SslCertificate {
                name: name.to_string(),
                cert_type: Some(cert_type.to_string()),
                certificate: body.map(str::to_string),
            },
        );
        self
    }
}

impl CertificateSource for FakeSource {
    async fn list_proxies(&self, _project: &str) -> Result<Vec<TargetHttpsProxy>, GcpError> {
        Ok(self.proxies.clone())
    }

    async fn fetch_certificate(
        &self,
        _project: &str,
        reference: &str,
    ) -> Result<SslCertificate, GcpError> {
        self.certificates
            .get(reference)
            .cloned()
            .ok_or_else(|| GcpError::Status {
                url: reference.to_string(),
                status: 404,
                body: "not found".to_string(),
            })
    }
}

#[tokio::test]
async fn test_scan_builds_records_in_order() {
    let source = FakeSource::default()
        .proxy("web", &["managed", "uploaded"])
        .proxy("api", &["broken"])
        .cert("managed", "MANAGED", Some("not even pem"))
        .cert("uploaded", "SELF_MANAGED", Some(TEST_CERT))
        .cert("broken", "SELF_MANAGED", Some("-----BEGIN CERTIFICATE-----\n"));

    let outcome = Scanner::new(source, 2).scan("demo").await.unwrap();

    assert_eq!(outcome.proxy_count, 2);
    let names: Vec<(&str, &str)> = outcome
        .records
        .iter()
        .map(|r| (r.proxy_name.as_str(), r.cert_name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![("web", "managed"), ("web", "uploaded"), ("api", "broken")]
    );

    assert_eq!(outcome.records[0].expiry, Expiry::NotEvaluated);
    assert!(outcome.records[1].not_valid_after().is_some());
    assert!(outcome.records[2].decode_error().is_some());
}

#[tokio::test]
async fn test_scan_empty_project() {
    let outcome = Scanner::new(FakeSource::default(), 4).scan("demo").await.unwrap();
    assert_eq!(outcome.proxy_count, 0);
    assert!(outcome.records.is_empty());
}

#[tokio::test]
async fn test_proxy_without_certificates() {
    let source = FakeSource::default().proxy("http-only", &[]);
    let outcome = Scanner::new(source, 1).scan("demo").await.unwrap();
    assert_eq!(outcome.proxy_count, 1);
    assert!(outcome.records.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_aborts_scan() {
    let source = FakeSource::default().proxy("web", &["missing"]);
    let err = Scanner::new(source, 1).scan("demo").await.unwrap_err();
    assert!(matches!(err, GcpError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_missing_type_is_self_managed() {
    let mut source = FakeSource::default().proxy("web", &["untyped"]);
    source.certificates.insert(
        format!("{}untyped", LINK),
        SslCertificate {
            name: "untyped".to_string(),
            cert_type: None,
            certificate: Some(TEST_CERT.to_string()),
        },
    );

    let outcome = Scanner::new(source, 1).scan("demo").await.unwrap();
    assert!(!outcome.records[0].is_managed());
    assert!(outcome.records[0].not_valid_after().is_some());
}
