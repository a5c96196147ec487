//! Main validation orchestration.
//!
//! Ties together parsing, the schema rules and the error collector, and maps
//! a run's outcome to the process exit status.

use std::io::Write;
use std::path::Path;

use crate::collector::ErrorCollector;
use crate::config::ValidatorConfig;
use crate::error::{Result, ValidatorError};
use crate::formatter;
use crate::parser::{Node, parse_documents};
use crate::rules;
use crate::types::ValidationError;

/// Exit status for a clean manifest.
pub const EXIT_OK: i32 = 0;
/// Exit status for violations, unreadable files and malformed YAML.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for command-line misuse.
pub const EXIT_USAGE: i32 = 2;

/// Result of validating one input file.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Name the file is reported under.
    pub file_name: String,
    /// Number of YAML documents validated.
    pub document_count: usize,
    /// Violations in accumulation order.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_valid() { EXIT_OK } else { EXIT_FAILURE }
    }
}

/// Validate parsed documents in order into one shared collector.
pub fn validate_documents(documents: &[Node]) -> ErrorCollector {
    rules::init_patterns();

    let mut errors = ErrorCollector::new();
    for (index, doc) in documents.iter().enumerate() {
        let before = errors.len();
        rules::validate_document(doc, &mut errors);
        log::debug!(
            "document {}: {} violation(s)",
            index + 1,
            errors.len() - before
        );
    }
    errors
}

/// Parse and validate manifest text, reporting it under `file_name`.
pub fn lint_str(content: &str, file_name: &str) -> Result<ValidationReport> {
    let documents = parse_documents(content)?;
    if documents.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    let errors = validate_documents(&documents).into_errors();
    log::info!("{}: {} violation(s)", file_name, errors.len());

    Ok(ValidationReport {
        file_name: file_name.to_string(),
        document_count: documents.len(),
        errors,
    })
}

/// Read, parse and validate a manifest file.
pub fn lint_file(path: &Path, config: &ValidatorConfig) -> Result<ValidationReport> {
    let file_name = display_name(path, config);
    let content = std::fs::read_to_string(path).map_err(|source| ValidatorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    lint_str(&content, &file_name)
}

/// Name a file is reported under: its base name unless configured otherwise.
pub fn display_name(path: &Path, config: &ValidatorConfig) -> String {
    if config.show_full_path {
        return path.display().to_string();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Validate `path` and write the outcome to `out` / `err`, returning the exit status.
pub fn run(
    path: &Path,
    config: &ValidatorConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<i32> {
    let file_name = display_name(path, config);

    match lint_file(path, config) {
        Ok(report) => {
            formatter::write_report(out, &report, config.format)?;
            Ok(report.exit_code())
        }
        Err(ValidatorError::EmptyInput) => {
            writeln!(err, "{}: {}", file_name, ValidatorError::EmptyInput)?;
            Ok(EXIT_FAILURE)
        }
        Err(fatal) => {
            log::debug!("{}: fatal: {:?}", file_name, fatal);
            formatter::write_fatal(out, &file_name, &fatal, config.format)?;
            Ok(EXIT_FAILURE)
        }
    }
}
