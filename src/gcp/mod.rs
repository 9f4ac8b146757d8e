//! Google Cloud access
//!
//! Credentials and the Compute Engine calls used to enumerate load balancer
//! certificates.

pub mod auth;
pub mod compute;

pub use auth::{resolve_token, AccessToken};
pub use compute::{certificate_name, ComputeClient, SslCertificate, TargetHttpsProxy};
