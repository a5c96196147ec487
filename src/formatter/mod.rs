//! Output formatters for validation reports.
//!
//! - Plain - `<file>:<line> <message>`, one line per violation (default)
//! - JSON - Machine-readable JSON output
//! - GitHub - GitHub Actions annotations

pub mod github;
pub mod json;
pub mod plain;

use std::io::Write;

use crate::error::ValidatorError;
use crate::lint::ValidationReport;

/// Output format for validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per violation
    #[default]
    Plain,
    /// JSON format for machine processing
    Json,
    /// GitHub Actions annotations
    #[value(name = "github")]
    GitHub,
}

/// Render a report according to the specified format.
pub fn format_report(report: &ValidationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => plain::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::GitHub => github::format(report),
    }
}

/// Render a fatal error (unreadable file, malformed YAML) for `file_name`.
pub fn format_fatal(file_name: &str, error: &ValidatorError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => plain::format_fatal(file_name, error),
        OutputFormat::Json => json::format_fatal(file_name, error),
        OutputFormat::GitHub => github::format_fatal(file_name, error),
    }
}

/// Write a rendered report to `out`.
pub fn write_report(
    out: &mut dyn Write,
    report: &ValidationReport,
    format: OutputFormat,
) -> std::io::Result<()> {
    out.write_all(format_report(report, format).as_bytes())?;
    out.flush()
}

/// Write a rendered fatal error to `out`.
pub fn write_fatal(
    out: &mut dyn Write,
    file_name: &str,
    error: &ValidatorError,
    format: OutputFormat,
) -> std::io::Result<()> {
    out.write_all(format_fatal(file_name, error, format).as_bytes())?;
    out.flush()
}

/// `<file>:<line>` when the line is known, else `<file>:`.
pub(crate) fn location(file_name: &str, line: Option<u32>) -> String {
    match line {
        Some(line) => format!("{}:{}", file_name, line),
        None => format!("{}:", file_name),
    }
}
