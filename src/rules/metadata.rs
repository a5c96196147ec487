//! `metadata`: object name, namespace and labels.

use crate::accessor::{expect_kind, expect_scalar_string, lookup};
use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind};
use crate::types::{ErrorKind, ValidationError};

const FIELD: &str = "metadata";
const NAME: &str = "metadata.name";
const NAMESPACE: &str = "metadata.namespace";
const LABELS: &str = "metadata.labels";

pub fn validate(node: &Node, errors: &mut ErrorCollector) {
    if !expect_kind(node, NodeKind::Mapping, FIELD, errors) {
        return;
    }

    match lookup(node, "name") {
        None => errors.push(ValidationError::required(NAME, None)),
        Some(name) => {
            if let Some(value) = expect_scalar_string(name, NAME, errors) {
                if value.trim().is_empty() {
                    errors.push(ValidationError::invalid_format(NAME, "", name.line));
                }
            }
        }
    }

    if let Some(namespace) = lookup(node, "namespace") {
        expect_scalar_string(namespace, NAMESPACE, errors);
    }

    if let Some(labels) = lookup(node, "labels") {
        validate_labels(labels, errors);
    }
}

/// Label keys are free-form; every value must be a scalar.
fn validate_labels(labels: &Node, errors: &mut ErrorCollector) {
    if !expect_kind(labels, NodeKind::Mapping, LABELS, errors) {
        return;
    }

    for entry in labels.as_mapping().unwrap_or_default() {
        if !entry.value.is_scalar() {
            errors.push(ValidationError {
                line: entry.value.line,
                field: LABELS.to_string(),
                kind: ErrorKind::TypeMismatch,
                message: format!("{} value must be string", LABELS),
            });
        }
    }
}
