//! CLI argument definitions using clap

use crate::models::StatusTier;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lb-cert-tracker")]
#[command(version)]
#[command(about = "Track TLS certificate expiry for HTTPS load balancer proxies", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Settings file (default: config/default.toml if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project's HTTPS load balancer certificates
    Scan(ScanArgs),

    /// Check local PEM certificate files
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// GCP project ID
    #[arg(short, long, required = true)]
    pub project: String,

    /// OAuth2 access token (default: environment, then gcloud)
    #[arg(long, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Number of certificates fetched concurrently
    #[arg(long)]
    pub parallel: Option<usize>,

    /// Only show certificates that need attention
    #[arg(long)]
    pub issues_only: bool,

    /// Exit with status 2 if any certificate is at least this urgent
    #[arg(long, value_enum, value_name = "TIER")]
    pub fail_on: Option<FailOn>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// PEM certificate files
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Exit with status 2 if any certificate is at least this urgent
    #[arg(long, value_enum, value_name = "TIER")]
    pub fail_on: Option<FailOn>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table (default)
    Table,
    /// JSON output
    Json,
    /// One line per certificate
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}

/// Tier threshold for a failing exit status
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    Warning,
    ExpiringSoon,
    ParseError,
}

impl FailOn {
    pub fn tier(&self) -> StatusTier {
        match self {
            FailOn::Warning => StatusTier::Warning,
            FailOn::ExpiringSoon => StatusTier::ExpiringSoon,
            FailOn::ParseError => StatusTier::ParseError,
        }
    }
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "lb_cert_tracker=debug"
        } else {
            "warn"
        }
    }
}
