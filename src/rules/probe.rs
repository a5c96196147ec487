//! Readiness and liveness probes.
//!
//! The caller supplies the probe's field label. The inner `path` and `port`
//! messages use bare labels, without the probe prefix.

use crate::accessor::{expect_kind, expect_scalar_int, expect_scalar_string, lookup};
use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind};
use crate::rules::PORT_RANGE;
use crate::types::ValidationError;

const PATH: &str = "path";
const PORT: &str = "port";

pub fn validate(node: &Node, field: &str, errors: &mut ErrorCollector) {
    if !expect_kind(node, NodeKind::Mapping, field, errors) {
        return;
    }

    let http_get_field = format!("{}.httpGet", field);
    let Some(http_get) = lookup(node, "httpGet") else {
        errors.push(ValidationError::required(&http_get_field, None));
        return;
    };
    if !expect_kind(http_get, NodeKind::Mapping, &http_get_field, errors) {
        return;
    }

    match lookup(http_get, "path") {
        None => errors.push(ValidationError::required(PATH, None)),
        Some(path) => {
            if let Some(value) = expect_scalar_string(path, PATH, errors) {
                if !value.starts_with('/') {
                    errors.push(ValidationError::invalid_format(PATH, value, path.line));
                }
            }
        }
    }

    match lookup(http_get, "port") {
        None => errors.push(ValidationError::required(PORT, None)),
        Some(port) => {
            if let Some(value) = expect_scalar_int(port, PORT, errors) {
                if !PORT_RANGE.contains(&value) {
                    errors.push(ValidationError::out_of_range(PORT, port.line));
                }
            }
        }
    }
}
