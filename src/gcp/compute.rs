//! Compute Engine v1 REST client
//!
//! Only the two read calls the inventory needs: listing global Target HTTPS
//! Proxies and fetching SSL certificate resources.

use super::auth::AccessToken;
use crate::config::GcpSettings;
use crate::utils::GcpError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use tracing::{debug, warn};

/// Longest response body excerpt kept in error messages
const ERROR_BODY_LIMIT: usize = 300;

/// A Target HTTPS Proxy and the certificates it references
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetHttpsProxy {
    pub name: String,
    /// Self-links (or bare names) of bound certificates
    #[serde(default)]
    pub ssl_certificates: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProxyListPage {
    #[serde(default)]
    items: Vec<TargetHttpsProxy>,
    next_page_token: Option<String>,
}

/// An SSL certificate resource
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslCertificate {
    #[serde(default)]
    pub name: String,
    /// `MANAGED` or `SELF_MANAGED`
    #[serde(rename = "type")]
    pub cert_type: Option<String>,
    /// PEM body
    pub certificate: Option<String>,
}

/// Name of a certificate from its reference (last path segment)
pub fn certificate_name(reference: &str) -> &str {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(reference)
}

/// Drain a paged listing. Stops on a missing or empty `nextPageToken`, or
/// when the server hands back the token it was just given.
async fn collect_pages<F, Fut>(mut fetch: F) -> Result<Vec<TargetHttpsProxy>, GcpError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ProxyListPage, GcpError>>,
{
    let mut proxies = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = fetch(page_token.clone()).await?;
        debug!(count = page.items.len(), "Fetched proxy page");
        proxies.extend(page.items);

        match page.next_page_token {
            Some(token) if !token.is_empty() && page_token.as_deref() != Some(token.as_str()) => {
                page_token = Some(token)
            }
            Some(token) if !token.is_empty() => {
                warn!(page_token = %token, "Repeated page token, stopping pagination");
                break;
            }
            _ => break,
        }
    }

    Ok(proxies)
}

/// Authenticated Compute Engine client
pub struct ComputeClient {
    http: reqwest::Client,
    api_base: String,
    token: AccessToken,
}

impl ComputeClient {
    pub fn new(settings: &GcpSettings, token: AccessToken) -> Result<Self, GcpError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!("lb-cert-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GcpError::Transport {
                url: settings.api_base.clone(),
                source: e,
            })?;

        Ok(Self {
            http,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// List every global Target HTTPS Proxy, following pagination
    pub async fn list_target_https_proxies(
        &self,
        project: &str,
    ) -> Result<Vec<TargetHttpsProxy>, GcpError> {
        let url = format!("{}/projects/{}/global/targetHttpsProxies", self.api_base, project);
        collect_pages(|page_token| {
            let url = url.clone();
            async move {
                let query: Vec<(&str, &str)> = match &page_token {
                    Some(token) => vec![("pageToken", token.as_str())],
                    None => vec![],
                };
                self.get_json(&url, &query).await
            }
        })
        .await
    }

    /// Fetch a certificate by self-link or bare name
    pub async fn get_ssl_certificate(
        &self,
        project: &str,
        reference: &str,
    ) -> Result<SslCertificate, GcpError> {
        let url = self.certificate_url(project, reference);
        self.get_json(&url, &[]).await
    }

    fn certificate_url(&self, project: &str, reference: &str) -> String {
        if reference.starts_with("https://") {
            reference.to_string()
        } else {
            format!(
                "{}/projects/{}/global/sslCertificates/{}",
                self.api_base,
                project,
                certificate_name(reference)
            )
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GcpError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(self.token.secret())
            .send()
            .await
            .map_err(|e| GcpError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| GcpError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(GcpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        serde_json::from_str(&text).map_err(|e| GcpError::InvalidResponse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
