//! Inventory scan orchestration
//!
//! Walks proxies and their bound certificates through a [`CertificateSource`]
//! and turns each certificate into a [`CertificateRecord`]. Classification
//! happens later, when the report is built.

use crate::gcp::{certificate_name, ComputeClient, SslCertificate, TargetHttpsProxy};
use crate::models::{CertificateRecord, CertificateType};
use crate::utils::GcpError;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;
use tracing::{debug, info, warn};

/// Where proxies and certificate resources come from
pub trait CertificateSource {
    fn list_proxies(
        &self,
        project: &str,
    ) -> impl Future<Output = Result<Vec<TargetHttpsProxy>, GcpError>> + Send;

    fn fetch_certificate(
        &self,
        project: &str,
        reference: &str,
    ) -> impl Future<Output = Result<SslCertificate, GcpError>> + Send;
}

impl CertificateSource for ComputeClient {
    async fn list_proxies(&self, project: &str) -> Result<Vec<TargetHttpsProxy>, GcpError> {
        self.list_target_https_proxies(project).await
    }

    async fn fetch_certificate(
        &self,
        project: &str,
        reference: &str,
    ) -> Result<SslCertificate, GcpError> {
        self.get_ssl_certificate(project, reference).await
    }
}

/// Records from one scan, in proxy then reference order
#[derive(Debug)]
pub struct ScanOutcome {
    pub proxy_count: usize,
    pub records: Vec<CertificateRecord>,
}

/// Drives a scan against a [`CertificateSource`]
pub struct Scanner<S> {
    source: S,
    parallel: usize,
}

impl<S: CertificateSource + Sync> Scanner<S> {
    pub fn new(source: S, parallel: usize) -> Self {
        Self {
            source,
            parallel: parallel.max(1),
        }
    }

    /// Enumerate every proxy's certificates and decode the self-managed ones.
    ///
    /// Certificate resources are fetched up to `parallel` at a time; results
    /// keep discovery order. Any API failure aborts the scan.
    pub async fn scan(&self, project: &str) -> Result<ScanOutcome, GcpError> {
        let proxies = self.source.list_proxies(project).await?;
        if proxies.is_empty() {
            warn!(project, "No target HTTPS proxies found");
        }

        let mut references = Vec::new();
        for proxy in &proxies {
            info!(
                proxy = %proxy.name,
                certificates = proxy.ssl_certificates.len(),
                "Found proxy"
            );
            for reference in &proxy.ssl_certificates {
                references.push((proxy.name.as_str(), reference.as_str()));
            }
        }

        let records: Vec<CertificateRecord> = stream::iter(references)
            .map(move |(proxy_name, reference)| async move {
                let cert = self.source.fetch_certificate(project, reference).await?;
                Ok::<_, GcpError>(build_record(proxy_name, reference, &cert))
            })
            .buffered(self.parallel)
            .try_collect()
            .await?;

        Ok(ScanOutcome {
            proxy_count: proxies.len(),
            records,
        })
    }
}

/// Turn a fetched resource into a record. Managed bodies are never decoded.
pub fn build_record(proxy_name: &str, reference: &str, cert: &SslCertificate) -> CertificateRecord {
    let cert_name = certificate_name(reference);
    let cert_type = CertificateType::from_api(cert.cert_type.as_deref());
    debug!(proxy = proxy_name, cert = cert_name, managed = cert_type.is_managed(), "Fetched certificate");

    let record = CertificateRecord::from_parts(
        proxy_name,
        cert_name,
        cert_type,
        cert.certificate.as_deref().map(str::as_bytes),
    );

    if let Some(error) = record.decode_error() {
        warn!(proxy = proxy_name, cert = cert_name, error, "Failed to decode certificate");
    }

    record
}
