//! lb-cert-tracker - TLS certificate expiry tracking for HTTPS load balancers
//!
//! Scans every Target HTTPS Proxy in a GCP project, decodes the bound
//! self-managed certificates and reports which ones need attention.

use clap::Parser;
use lb_cert_tracker::cli::{Cli, Commands};
use lb_cert_tracker::commands::{self, Outcome};
use lb_cert_tracker::config::load_settings;
use lb_cert_tracker::utils::progress::print_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match run(cli).await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let settings = load_settings(cli.config.as_deref())?;

    let outcome = match &cli.command {
        Commands::Scan(args) => commands::run_scan(args, &settings, cli.format).await?,
        Commands::Inspect(args) => commands::run_inspect(args, &settings, cli.format)?,
    };

    Ok(outcome)
}
