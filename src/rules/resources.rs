//! `spec.containers[].resources` and its `requests` / `limits` quantity maps.

use crate::accessor::{expect_kind, expect_scalar_int, expect_scalar_string, lookup};
use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind};
use crate::rules::MEMORY_QUANTITY_REGEX;
use crate::types::ValidationError;

const FIELD: &str = "spec.containers[].resources";
const REQUESTS: &str = "spec.containers[].resources.requests";
const LIMITS: &str = "spec.containers[].resources.limits";

pub fn validate(node: &Node, errors: &mut ErrorCollector) {
    if !expect_kind(node, NodeKind::Mapping, FIELD, errors) {
        return;
    }

    if let Some(requests) = lookup(node, "requests") {
        validate_quantities(requests, REQUESTS, errors);
    }
    if let Some(limits) = lookup(node, "limits") {
        validate_quantities(limits, LIMITS, errors);
    }
}

/// Check every `cpu` and `memory` entry of a quantity map. Other resource
/// names are accepted without inspection.
pub fn validate_quantities(node: &Node, field: &str, errors: &mut ErrorCollector) {
    if !expect_kind(node, NodeKind::Mapping, field, errors) {
        return;
    }

    for entry in node.as_mapping().unwrap_or_default() {
        let value = &entry.value;
        match entry.key.as_scalar().unwrap_or_default() {
            "cpu" => {
                let cpu_field = format!("{}.cpu", field);
                if let Some(cpu) = expect_scalar_int(value, &cpu_field, errors) {
                    if cpu < 0 {
                        errors.push(ValidationError::out_of_range(&cpu_field, value.line));
                    }
                }
            }
            "memory" => {
                let memory_field = format!("{}.memory", field);
                if let Some(memory) = expect_scalar_string(value, &memory_field, errors) {
                    if !MEMORY_QUANTITY_REGEX.is_match(memory) {
                        errors.push(ValidationError::invalid_format(
                            &memory_field,
                            memory,
                            value.line,
                        ));
                    }
                }
            }
            other => log::trace!("{}: ignoring resource '{}'", field, other),
        }
    }
}
