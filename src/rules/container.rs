//! `spec.containers[]`: one container definition.

use std::collections::HashSet;

use crate::accessor::{expect_kind, expect_scalar_string, lookup};
use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind};
use crate::rules::{CONTAINER_NAME_REGEX, port, probe, resources};
use crate::types::ValidationError;

const FIELD: &str = "spec.containers[]";
const NAME: &str = "spec.containers[].name";
const IMAGE: &str = "spec.containers[].image";
const PORTS: &str = "spec.containers[].ports";
const READINESS_PROBE: &str = "spec.containers[].readinessProbe";
const LIVENESS_PROBE: &str = "spec.containers[].livenessProbe";
const RESOURCES: &str = "spec.containers[].resources";

/// Every image must come from this registry.
pub const IMAGE_REGISTRY_PREFIX: &str = "registry.bigbrother.io/";

/// Validate one container. `seen_names` holds the names already accepted in
/// the same containers array.
pub fn validate(node: &Node, seen_names: &mut HashSet<String>, errors: &mut ErrorCollector) {
    if !expect_kind(node, NodeKind::Mapping, FIELD, errors) {
        return;
    }

    match lookup(node, "name") {
        None => errors.push(ValidationError::required(NAME, None)),
        Some(name) => check_name(name, seen_names, errors),
    }

    match lookup(node, "image") {
        None => errors.push(ValidationError::required(IMAGE, None)),
        Some(image) => {
            if let Some(value) = expect_scalar_string(image, IMAGE, errors) {
                if !is_valid_image(value) {
                    errors.push(ValidationError::invalid_format("image", value, image.line));
                }
            }
        }
    }

    if let Some(ports) = lookup(node, "ports") {
        // A malformed ports list abandons the rest of this container.
        if !expect_kind(ports, NodeKind::Sequence, PORTS, errors) {
            return;
        }
        for item in ports.as_sequence().unwrap_or_default() {
            port::validate(item, errors);
        }
    }

    if let Some(readiness) = lookup(node, "readinessProbe") {
        probe::validate(readiness, READINESS_PROBE, errors);
    }

    if let Some(liveness) = lookup(node, "livenessProbe") {
        probe::validate(liveness, LIVENESS_PROBE, errors);
    }

    match lookup(node, "resources") {
        None => errors.push(ValidationError::required(RESOURCES, None)),
        Some(res) => resources::validate(res, errors),
    }
}

fn check_name(name: &Node, seen_names: &mut HashSet<String>, errors: &mut ErrorCollector) {
    let Some(value) = expect_scalar_string(name, NAME, errors) else {
        return;
    };

    if value.trim().is_empty() {
        errors.push(ValidationError::required("name", name.line));
    } else if !CONTAINER_NAME_REGEX.is_match(value) {
        errors.push(ValidationError::invalid_format(NAME, value, name.line));
    } else if !seen_names.insert(value.to_string()) {
        // Duplicates share the malformed-name message.
        errors.push(ValidationError::invalid_format(NAME, value, name.line));
    }
}

/// `registry.bigbrother.io/<path>:<tag>` with a non-empty tag after the last `/`.
pub fn is_valid_image(image: &str) -> bool {
    if !image.starts_with(IMAGE_REGISTRY_PREFIX) {
        return false;
    }

    let last_slash = image.rfind('/');
    match image.rfind(':') {
        Some(colon) => Some(colon) > last_slash && colon + 1 < image.len(),
        None => false,
    }
}
