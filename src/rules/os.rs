//! `spec.os`: either a bare OS name or an object with a `name` field.

use crate::accessor::{expect_scalar_string, lookup};
use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind, NodeValue};
use crate::types::{ErrorKind, ValidationError};

const FIELD: &str = "spec.os";
const SCALAR_FIELD: &str = "os";
const NAME: &str = "spec.os.name";

const SUPPORTED_OS: &[&str] = &["linux", "windows"];

fn is_supported(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    SUPPORTED_OS.contains(&normalized.as_str())
}

pub fn validate(node: &Node, errors: &mut ErrorCollector) {
    match &node.value {
        NodeValue::Scalar { text, .. } => {
            if !is_supported(text) {
                errors.push(ValidationError::unsupported(SCALAR_FIELD, text, node.line));
            }
        }
        NodeValue::Mapping(_) => match lookup(node, "name") {
            None => errors.push(ValidationError::required(NAME, None)),
            Some(name) => {
                if let Some(value) = expect_scalar_string(name, NAME, errors) {
                    if !is_supported(value) {
                        errors.push(ValidationError::unsupported(NAME, value, name.line));
                    }
                }
            }
        },
        NodeValue::Sequence(_) => {
            // Reported as a format problem, not a plain kind mismatch.
            errors.push(ValidationError {
                kind: ErrorKind::InvalidFormat,
                ..ValidationError::wrong_kind(FIELD, NodeKind::Scalar, node.line)
            });
        }
    }
}
