//! Render scan reports to the terminal

use super::tables::{format_table, TierRow};
use crate::models::{Expiry, ReportEntry, ScanReport, StatusTier};
use console::style;

const TABLE_HEADERS: [&str; 6] = [
    "Status",
    "Proxy",
    "Certificate",
    "Managed",
    "Expires",
    "Days Left",
];

/// Print a section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(title).cyan().bold());
    println!();
}

/// Print the report as a table followed by the tier summary
pub fn print_report_table(report: &ScanReport) {
    print_header(&format!("📋 TLS Certificate Expiry Report: {}", report.project));

    if report.entries.is_empty() {
        println!("  {}", style("No certificates to report").dim());
    } else {
        print!("{}", format_report_table(report));
    }

    println!();
    println!("  {}", format_summary(report));
}

/// Print the report one line per certificate
pub fn print_report_plain(report: &ScanReport) {
    println!("📋 TLS Certificate Expiry Report:");
    println!();
    for entry in &report.entries {
        println!("{}", format_plain_line(entry));
    }
}

/// Print a titled block of key/value pairs with dot leaders
pub fn print_key_values(title: &str, pairs: &[(String, String)]) {
    println!();
    println!("    {}", style(title).bold());
    let max_key_len = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in pairs {
        let dots = ".".repeat(max_key_len.saturating_sub(key.len()) + 2);
        println!("    {} {} {}", style(key).dim(), style(dots).dim(), value);
    }
}

pub fn format_report_table(report: &ScanReport) -> String {
    let rows: Vec<TierRow> = report
        .entries
        .iter()
        .map(|entry| TierRow {
            tier: entry.tier,
            cells: vec![
                format!("{} {}", entry.tier.icon(), entry.tier.label()),
                entry.record.proxy_name.clone(),
                entry.record.cert_name.clone(),
                (if entry.record.is_managed() { "Yes" } else { "No" }).to_string(),
                format_expiry_cell(&entry.record.expiry),
                format_days_left(entry.days_left),
            ],
        })
        .collect();

    format_table(&TABLE_HEADERS, &rows)
}

/// One line in the layout of the classic report:
/// `🟡 Warning | Proxy: web | Cert: web-cert | Managed: false | Expiry: 2026-01-01T00:00:00+00:00`
pub fn format_plain_line(entry: &ReportEntry) -> String {
    format!(
        "{} {} | Proxy: {} | Cert: {} | Managed: {} | Expiry: {}",
        entry.tier.icon(),
        entry.tier.label(),
        entry.record.proxy_name,
        entry.record.cert_name,
        entry.record.is_managed(),
        entry.record.expiry
    )
}

/// "5 certificates across 2 proxies: 1 Parse Error, 0 Expiring Soon, ..."
pub fn format_summary(report: &ScanReport) -> String {
    let counts: Vec<String> = StatusTier::ALL
        .iter()
        .map(|tier| format!("{} {}", report.summary.count(*tier), tier.label()))
        .collect();

    format!(
        "{} {} across {} {}: {}",
        report.summary.total,
        plural(report.summary.total, "certificate"),
        report.proxy_count,
        plural(report.proxy_count, "proxy"),
        counts.join(", ")
    )
}

fn format_expiry_cell(expiry: &Expiry) -> String {
    match expiry {
        Expiry::NotEvaluated => "auto-renewed".to_string(),
        Expiry::NotValidAfter(ts) => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
        Expiry::DecodeError(message) => message.clone(),
    }
}

/// Negative counts are shown as EXPIRED; the tier stays `ExpiringSoon`
pub fn format_days_left(days_left: Option<i64>) -> String {
    match days_left {
        None => "-".to_string(),
        Some(days) if days < 0 => "EXPIRED".to_string(),
        Some(days) => days.to_string(),
    }
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => noun.to_string(),
        (_, "proxy") => "proxies".to_string(),
        _ => format!("{}s", noun),
    }
}
