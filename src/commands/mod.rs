//! Command implementations for lb-cert-tracker

pub mod inspect;
pub mod scan;

pub use inspect::{inspect_bytes, run_inspect, InspectResult};
pub use scan::run_scan;

use crate::cli::FailOn;
use crate::models::{ScanReport, StatusTier};

/// How a command finished, mapped to the process exit status by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing reached the `--fail-on` tier
    Clean,
    /// At least one certificate reached the `--fail-on` tier
    ThresholdReached(StatusTier),
}

impl Outcome {
    pub fn evaluate(report: &ScanReport, fail_on: Option<FailOn>) -> Self {
        Self::from_tiers(report.entries.iter().map(|e| e.tier), fail_on)
    }

    pub fn from_tiers(tiers: impl IntoIterator<Item = StatusTier>, fail_on: Option<FailOn>) -> Self {
        let Some(fail_on) = fail_on else {
            return Outcome::Clean;
        };
        match tiers.into_iter().min() {
            Some(worst) if worst.is_at_least(fail_on.tier()) => Outcome::ThresholdReached(worst),
            _ => Outcome::Clean,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::ThresholdReached(_) => 2,
        }
    }
}
