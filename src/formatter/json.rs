//! JSON output formatter.

use serde_json::json;

use crate::error::ValidatorError;
use crate::lint::ValidationReport;

/// Format a report as JSON.
pub fn format(report: &ValidationReport) -> String {
    let output = json!({
        "filePath": report.file_name,
        "valid": report.is_valid(),
        "documentCount": report.document_count,
        "errorCount": report.error_count(),
        "errors": report.errors,
    });

    let mut rendered = serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
    rendered.push('\n');
    rendered
}

/// Format a fatal error as JSON.
pub fn format_fatal(file_name: &str, error: &ValidatorError) -> String {
    let output = json!({
        "filePath": file_name,
        "valid": false,
        "fatal": {
            "line": error.line(),
            "message": error.to_string(),
        },
    });

    let mut rendered = serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    #[test]
    fn test_json_format() {
        let report = ValidationReport {
            file_name: "pod.yaml".to_string(),
            document_count: 1,
            errors: vec![
                ValidationError::required("kind", None),
                ValidationError::out_of_range("port", Some(12)),
            ],
        };

        let parsed: serde_json::Value = serde_json::from_str(&format(&report)).unwrap();

        assert_eq!(parsed["filePath"], "pod.yaml");
        assert_eq!(parsed["valid"], false);
        assert_eq!(parsed["errorCount"], 2);

        let errors = parsed["errors"].as_array().unwrap();
        assert_eq!(errors[0]["line"], serde_json::Value::Null);
        assert_eq!(errors[0]["kind"], "required");
        assert_eq!(errors[0]["field"], "kind");
        assert_eq!(errors[1]["line"], 12);
        assert_eq!(errors[1]["kind"], "out-of-range");
        assert_eq!(errors[1]["message"], "port value out of range");
    }

    #[test]
    fn test_json_format_clean() {
        let report = ValidationReport {
            file_name: "pod.yaml".to_string(),
            document_count: 2,
            errors: vec![],
        };

        let parsed: serde_json::Value = serde_json::from_str(&format(&report)).unwrap();
        assert_eq!(parsed["valid"], true);
        assert!(parsed["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_fatal() {
        let err = ValidatorError::Parse {
            message: "bad indentation at line 2 column 1".to_string(),
            line: Some(2),
        };
        let parsed: serde_json::Value = serde_json::from_str(&format_fatal("pod.yaml", &err)).unwrap();
        assert_eq!(parsed["fatal"]["line"], 2);
        assert_eq!(parsed["valid"], false);
    }
}
