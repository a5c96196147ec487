//! `spec.containers[].ports[]`: container port declarations.

use crate::accessor::{expect_kind, expect_scalar_int, expect_scalar_string, lookup};
use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind};
use crate::rules::PORT_RANGE;
use crate::types::ValidationError;

const FIELD: &str = "spec.containers[].ports[]";
const CONTAINER_PORT: &str = "spec.containers[].ports[].containerPort";
const PROTOCOL: &str = "spec.containers[].ports[].protocol";

const SUPPORTED_PROTOCOLS: &[&str] = &["TCP", "UDP"];

pub fn validate(node: &Node, errors: &mut ErrorCollector) {
    if !expect_kind(node, NodeKind::Mapping, FIELD, errors) {
        return;
    }

    match lookup(node, "containerPort") {
        None => errors.push(ValidationError::required(CONTAINER_PORT, None)),
        Some(port) => {
            if let Some(value) = expect_scalar_int(port, CONTAINER_PORT, errors) {
                if !PORT_RANGE.contains(&value) {
                    errors.push(ValidationError::out_of_range(CONTAINER_PORT, port.line));
                }
            }
        }
    }

    if let Some(protocol) = lookup(node, "protocol") {
        if let Some(value) = expect_scalar_string(protocol, PROTOCOL, errors) {
            if !SUPPORTED_PROTOCOLS.contains(&value) {
                errors.push(ValidationError::unsupported(PROTOCOL, value, protocol.line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_documents;

    fn check_ports(yaml: &str) -> Vec<(Option<u32>, String)> {
        let doc = parse_documents(yaml).unwrap().remove(0);
        let mut errors = ErrorCollector::new();
        for item in lookup(&doc, "ports").unwrap().as_sequence().unwrap() {
            validate(item, &mut errors);
        }
        errors.iter().map(|e| (e.line, e.message.clone())).collect()
    }

    #[test]
    fn test_valid_ports() {
        let yaml = r#"
ports:
  - containerPort: 1
  - containerPort: 65535
    protocol: UDP
  - containerPort: "8080"
    protocol: TCP
"#;
        assert!(check_ports(yaml).is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let yaml = "ports:\n  - containerPort: 70000\n  - containerPort: 0\n  - containerPort: -1\n";
        let message = "spec.containers[].ports[].containerPort value out of range".to_string();
        assert_eq!(
            check_ports(yaml),
            vec![
                (Some(2), message.clone()),
                (Some(3), message.clone()),
                (Some(4), message),
            ]
        );
    }

    #[test]
    fn test_container_port_required_and_int() {
        let yaml = "ports:\n  - protocol: TCP\n  - containerPort: http\n";
        assert_eq!(
            check_ports(yaml),
            vec![
                (
                    None,
                    "spec.containers[].ports[].containerPort is required".to_string()
                ),
                (
                    Some(3),
                    "spec.containers[].ports[].containerPort must be int".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_protocol_values() {
        let yaml = "ports:\n  - containerPort: 80\n    protocol: tcp\n  - containerPort: 81\n    protocol: SCTP\n";
        assert_eq!(
            check_ports(yaml),
            vec![
                (
                    Some(3),
                    "spec.containers[].ports[].protocol has unsupported value 'tcp'".to_string()
                ),
                (
                    Some(5),
                    "spec.containers[].ports[].protocol has unsupported value 'SCTP'".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_port_entry_must_be_object() {
        assert_eq!(
            check_ports("ports:\n  - 8080\n"),
            vec![(Some(2), "spec.containers[].ports[] must be object".to_string())]
        );
    }
}
