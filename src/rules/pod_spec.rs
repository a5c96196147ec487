//! `spec`: the PodSpec.

use std::collections::HashSet;

use crate::accessor::{expect_kind, lookup};
use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind};
use crate::rules::{container, os};
use crate::types::ValidationError;

const FIELD: &str = "spec";
const CONTAINERS: &str = "spec.containers";

pub fn validate(node: &Node, errors: &mut ErrorCollector) {
    if !expect_kind(node, NodeKind::Mapping, FIELD, errors) {
        return;
    }

    if let Some(os_node) = lookup(node, "os") {
        os::validate(os_node, errors);
    }

    let Some(containers) = lookup(node, "containers") else {
        errors.push(ValidationError::required(CONTAINERS, None));
        return;
    };
    if !expect_kind(containers, NodeKind::Sequence, CONTAINERS, errors) {
        return;
    }

    // Name uniqueness is scoped to this one containers array.
    let mut seen_names = HashSet::new();
    for item in containers.as_sequence().unwrap_or_default() {
        container::validate(item, &mut seen_names, errors);
    }
    log::trace!("validated {} container(s)", containers.len());
}
