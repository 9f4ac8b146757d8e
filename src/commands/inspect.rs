//! Inspect command implementation
//!
//! Decodes local PEM files as self-managed certificates, so a certificate can
//! be checked before it is uploaded to a load balancer.

use super::Outcome;
use crate::certificate::{days_left, decode_details, CertificateDetails, Thresholds};
use crate::cli::{InspectArgs, OutputFormat};
use crate::config::Settings;
use crate::models::{CertificateRecord, StatusTier};
use crate::output::terminal::format_days_left;
use crate::output::{print_header, print_json, print_key_values};
use crate::utils::{ReportError, Result};
use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;
use std::path::Path;

/// Classification of one local certificate file
#[derive(Debug, Clone, Serialize)]
pub struct InspectResult {
    pub path: String,
    pub tier: StatusTier,
    pub days_left: Option<i64>,
    pub details: Option<CertificateDetails>,
    pub error: Option<String>,
}

/// Run the inspect command
pub fn run_inspect(args: &InspectArgs, settings: &Settings, format: OutputFormat) -> Result<Outcome> {
    let now = Utc::now();
    let results = args
        .files
        .iter()
        .map(|path| inspect_file(path, &settings.thresholds, now))
        .collect::<Result<Vec<_>>>()?;

    match format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Plain => {
            for result in &results {
                println!("{}", format_inspect_line(result));
            }
        }
        OutputFormat::Table => print_inspect_results(&results),
    }

    Ok(Outcome::from_tiers(results.iter().map(|r| r.tier), args.fail_on))
}

fn inspect_file(path: &Path, thresholds: &Thresholds, now: DateTime<Utc>) -> Result<InspectResult> {
    let bytes = std::fs::read(path).map_err(|e| ReportError::ReadInput {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(inspect_bytes(&path.display().to_string(), &bytes, thresholds, now))
}

/// Decode and classify a PEM body as a self-managed certificate
pub fn inspect_bytes(
    label: &str,
    pem: &[u8],
    thresholds: &Thresholds,
    now: DateTime<Utc>,
) -> InspectResult {
    let decoded = decode_details(pem);
    let record = CertificateRecord::from_decoded(
        "-",
        label,
        decoded.as_ref().map(|d| d.not_after).map_err(Clone::clone),
    );
    let tier = thresholds.classify_record(&record, now);

    match decoded {
        Ok(details) => InspectResult {
            path: label.to_string(),
            tier,
            days_left: Some(days_left(details.not_after, now)),
            details: Some(details),
            error: None,
        },
        Err(e) => InspectResult {
            path: label.to_string(),
            tier,
            days_left: None,
            details: None,
            error: Some(e.to_string()),
        },
    }
}

pub fn format_inspect_line(result: &InspectResult) -> String {
    let expiry = match (&result.details, &result.error) {
        (Some(details), _) => details.not_after.to_rfc3339(),
        (None, Some(error)) => format!("Error parsing cert: {}", error),
        (None, None) => "-".to_string(),
    };
    format!(
        "{} {} | File: {} | Expiry: {}",
        result.tier.icon(),
        result.tier.label(),
        result.path,
        expiry
    )
}

fn print_inspect_results(results: &[InspectResult]) {
    print_header("📋 Certificate Files");

    for result in results {
        println!(
            "  {} {} {}",
            result.tier.icon(),
            style(&result.path).bold(),
            style(result.tier.label()).dim()
        );

        match (&result.details, &result.error) {
            (Some(details), _) => {
                let pairs = vec![
                    ("Subject".to_string(), details.subject.clone()),
                    ("Issuer".to_string(), details.issuer.clone()),
                    ("Serial".to_string(), details.serial.clone()),
                    ("Not Before".to_string(), details.not_before.to_rfc3339()),
                    ("Not After".to_string(), details.not_after.to_rfc3339()),
                    ("Days Left".to_string(), format_days_left(result.days_left)),
                    ("DNS Names".to_string(), details.dns_names.join(", ")),
                    ("SHA-256".to_string(), details.fingerprint_sha256.clone()),
                ];
                print_key_values("Certificate Details", &pairs);
            }
            (None, Some(error)) => println!("    {} {}", style("✗").red(), error),
            (None, None) => {}
        }
        println!();
    }
}

