//! Scan command implementation

use super::Outcome;
use crate::cli::{OutputFormat, ScanArgs};
use crate::config::Settings;
use crate::gcp::{resolve_token, ComputeClient};
use crate::models::ScanReport;
use crate::output::render_report;
use crate::scanner::Scanner;
use crate::utils::progress::{create_spinner, print_warning};
use crate::utils::Result;
use chrono::Utc;
use tracing::info;

/// Run the scan command against a GCP project
pub async fn run_scan(args: &ScanArgs, settings: &Settings, format: OutputFormat) -> Result<Outcome> {
    let token = resolve_token(args.access_token.as_deref(), &settings.gcp.token_env).await?;
    let client = ComputeClient::new(&settings.gcp, token)?;
    let parallel = args.parallel.unwrap_or(settings.scan.parallel);
    let scanner = Scanner::new(client, parallel);

    let spinner = create_spinner(&format!("Scanning HTTPS load balancers in {}...", args.project));
    let scan = scanner.scan(&args.project).await;
    spinner.finish_and_clear();
    let scan = scan?;

    info!(
        project = %args.project,
        proxies = scan.proxy_count,
        certificates = scan.records.len(),
        "Scan complete"
    );

    if let Some(notice) = empty_inventory_notice(&args.project, scan.proxy_count, scan.records.len()) {
        print_warning(&notice);
    }

    let mut report = ScanReport::build(
        &args.project,
        scan.proxy_count,
        scan.records,
        &settings.thresholds,
        Utc::now(),
    );

    let outcome = Outcome::evaluate(&report, args.fail_on);
    if args.issues_only {
        report = report.issues_only();
    }
    render_report(&report, format)?;

    Ok(outcome)
}

/// Notice for a scan that found nothing to classify
fn empty_inventory_notice(project: &str, proxy_count: usize, certificate_count: usize) -> Option<String> {
    match (proxy_count, certificate_count) {
        (0, _) => Some(format!("No Target HTTPS Proxies found in {}", project)),
        (_, 0) => Some(format!(
            "No certificates attached to {} Target HTTPS {} in {}",
            proxy_count,
            if proxy_count == 1 { "Proxy" } else { "Proxies" },
            project
        )),
        _ => None,
    }
}
