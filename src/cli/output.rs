//! CLI output: error mapping and the run summary line.

use crate::error::AppError;
use crate::manifest::RunSummary;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &AppError) -> String {
    format!("Error: {}", e)
}

/// One-line summary printed after a successful run
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Wrote {} checksums to {}",
        summary.manifest.len(),
        summary.output.display()
    )
}
