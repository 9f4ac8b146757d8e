//! Output formatting module
//!
//! Provides the report formats:
//! - Terminal tables with colored tiers
//! - Plain one-line-per-certificate text
//! - JSON export

pub mod json;
pub mod tables;
pub mod terminal;

pub use json::{print_json, to_json};
pub use terminal::{
    format_plain_line, format_report_table, format_summary, print_header, print_key_values,
    print_report_plain, print_report_table,
};

use crate::cli::OutputFormat;
use crate::models::ScanReport;
use crate::utils::ReportError;

/// Render a scan report in the requested format
pub fn render_report(report: &ScanReport, format: OutputFormat) -> Result<(), ReportError> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Plain => {
            print_report_plain(report);
            Ok(())
        }
        OutputFormat::Table => {
            print_report_table(report);
            Ok(())
        }
    }
}
