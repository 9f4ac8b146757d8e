//! Scan report types

use super::{CertificateRecord, StatusTier};
use crate::certificate::{days_left, Thresholds};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A classified certificate
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub record: CertificateRecord,
    pub tier: StatusTier,
    /// Whole days until expiry, for decoded self-managed certificates
    pub days_left: Option<i64>,
}

/// Per-tier certificate counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub parse_error: usize,
    pub expiring_soon: usize,
    pub warning: usize,
    pub ok: usize,
}

impl ReportSummary {
    pub fn count(&self, tier: StatusTier) -> usize {
        match tier {
            StatusTier::ParseError => self.parse_error,
            StatusTier::ExpiringSoon => self.expiring_soon,
            StatusTier::Warning => self.warning,
            StatusTier::Ok => self.ok,
        }
    }
}

/// Result of one inventory scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Project or source the certificates came from
    pub project: String,
    /// The "now" every entry was classified against
    pub generated_at: DateTime<Utc>,
    pub proxy_count: usize,
    pub summary: ReportSummary,
    pub entries: Vec<ReportEntry>,
}

impl ScanReport {
    /// Classify every record against a single `now`
    pub fn build(
        project: impl Into<String>,
        proxy_count: usize,
        records: Vec<CertificateRecord>,
        thresholds: &Thresholds,
        now: DateTime<Utc>,
    ) -> Self {
        let entries: Vec<ReportEntry> = records
            .into_iter()
            .map(|record| {
                let tier = thresholds.classify_record(&record, now);
                let days_left = match (record.is_managed(), record.not_valid_after()) {
                    (false, Some(not_after)) => Some(days_left(not_after, now)),
                    _ => None,
                };
                ReportEntry {
                    record,
                    tier,
                    days_left,
                }
            })
            .collect();

        let mut summary = ReportSummary {
            total: entries.len(),
            ..Default::default()
        };
        for entry in &entries {
            match entry.tier {
                StatusTier::ParseError => summary.parse_error += 1,
                StatusTier::ExpiringSoon => summary.expiring_soon += 1,
                StatusTier::Warning => summary.warning += 1,
                StatusTier::Ok => summary.ok += 1,
            }
        }

        Self {
            project: project.into(),
            generated_at: now,
            proxy_count,
            summary,
            entries,
        }
    }

    /// Most urgent tier present, if any certificates were found
    pub fn worst_tier(&self) -> Option<StatusTier> {
        self.entries.iter().map(|e| e.tier).min()
    }

    /// Whether any certificate is at least as urgent as `threshold`
    pub fn has_tier_at_least(&self, threshold: StatusTier) -> bool {
        self.worst_tier()
            .map(|tier| tier.is_at_least(threshold))
            .unwrap_or(false)
    }

    /// Drop entries in the `Ok` tier
    pub fn issues_only(mut self) -> Self {
        self.entries.retain(|e| e.tier != StatusTier::Ok);
        self
    }
}
