//! Document root: `apiVersion`, `kind`, `metadata`, `spec`.

use crate::accessor::{expect_scalar_string, lookup};
use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind};
use crate::rules::{metadata, pod_spec};
use crate::types::ValidationError;

const SUPPORTED_API_VERSION: &str = "v1";
const SUPPORTED_KIND: &str = "Pod";

/// Validate one parsed document against the Pod schema.
pub fn validate_document(doc: &Node, errors: &mut ErrorCollector) {
    if !doc.is_mapping() {
        errors.push(ValidationError::wrong_kind(
            "document root",
            NodeKind::Mapping,
            doc.line,
        ));
        return;
    }

    check_exact_string(doc, "apiVersion", SUPPORTED_API_VERSION, errors);
    check_exact_string(doc, "kind", SUPPORTED_KIND, errors);

    match lookup(doc, "metadata") {
        Some(meta) => metadata::validate(meta, errors),
        None => errors.push(ValidationError::required("metadata", None)),
    }

    match lookup(doc, "spec") {
        Some(spec) => pod_spec::validate(spec, errors),
        None => errors.push(ValidationError::required("spec", None)),
    }
}

/// Required string field that must equal `expected` exactly.
fn check_exact_string(doc: &Node, field: &str, expected: &str, errors: &mut ErrorCollector) {
    let Some(node) = lookup(doc, field) else {
        errors.push(ValidationError::required(field, None));
        return;
    };

    if let Some(value) = expect_scalar_string(node, field, errors) {
        if value != expected {
            errors.push(ValidationError::unsupported(field, value, node.line));
        }
    }
}
