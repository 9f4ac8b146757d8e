//! Progress indicators for CLI mode
//!
//! This module provides progress display using indicatif and console.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a simple spinner for indeterminate operations.
///
/// The spinner is hidden when stderr is not a terminal, so piped
/// JSON/plain output stays clean.
pub fn create_spinner(message: &str) -> ProgressBar {
    if !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print a warning status to stderr
pub fn print_warning(message: &str) {
    eprintln!("  {} {}", style("⚠").yellow(), message);
}

/// Print an error status to stderr
pub fn print_error(message: &str) {
    eprintln!("  {} {}", style("✗").red(), message);
}
