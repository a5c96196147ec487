//! Plain text formatter.
//!
//! `<file>:<line> <message>` when the line is known, `<file>: <message>`
//! otherwise. A clean report produces no output at all.

use crate::error::ValidatorError;
use crate::formatter::location;
use crate::lint::ValidationReport;

/// Format a report as plain text.
pub fn format(report: &ValidationReport) -> String {
    let mut output = String::new();

    for error in &report.errors {
        output.push_str(&format!(
            "{} {}\n",
            location(&report.file_name, error.line),
            error.message
        ));
    }

    output
}

/// Format a fatal error as a single plain line.
pub fn format_fatal(file_name: &str, error: &ValidatorError) -> String {
    format!("{} {}\n", location(file_name, error.line()), error)
}
