//! GitHub Actions output formatter.
//!
//! Produces output in GitHub Actions workflow command format:
//! ::error file={name},line={line}::{message}

use crate::error::ValidatorError;
use crate::lint::ValidationReport;

/// Format a report for GitHub Actions.
pub fn format(report: &ValidationReport) -> String {
    let mut output = String::new();

    for error in &report.errors {
        output.push_str(&annotation(&report.file_name, error.line, &error.message));
    }

    output
}

/// Format a fatal error for GitHub Actions.
pub fn format_fatal(file_name: &str, error: &ValidatorError) -> String {
    annotation(file_name, error.line(), &error.to_string())
}

fn annotation(file_name: &str, line: Option<u32>, message: &str) -> String {
    match line {
        Some(line) => format!(
            "::error file={},line={}::{}\n",
            file_name,
            line,
            escape_github(message)
        ),
        None => format!("::error file={}::{}\n", file_name, escape_github(message)),
    }
}

/// Escape special characters for GitHub Actions.
fn escape_github(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
