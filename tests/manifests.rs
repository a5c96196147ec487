use std::path::PathBuf;

use proptest::prelude::*;
use yamlvalid::{ErrorKind, OutputFormat, ValidatorConfig, lint_file, lint_str};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn rendered(content: &str) -> String {
    let report = lint_str(content, "pod.yaml").unwrap();
    yamlvalid::formatter::format_report(&report, OutputFormat::Plain)
}

#[test]
fn test_fully_populated_pod_is_valid() {
    let report = lint_file(&fixture("valid_pod.yaml"), &ValidatorConfig::default()).unwrap();
    assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    assert_eq!(report.file_name, "valid_pod.yaml");
}

#[test]
fn test_every_violation_reported_in_document_order() {
    let report = lint_file(&fixture("invalid_pod.yaml"), &ValidatorConfig::default()).unwrap();
    let output = yamlvalid::formatter::format_report(&report, OutputFormat::Plain);

    let expected = [
        "invalid_pod.yaml:1 apiVersion has unsupported value 'v2'",
        "invalid_pod.yaml:4 metadata.name has invalid format ''",
        "invalid_pod.yaml:6 metadata.labels value must be string",
        "invalid_pod.yaml:8 os has unsupported value 'solaris'",
        "invalid_pod.yaml:10 spec.containers[].name has invalid format 'Web_Server'",
        "invalid_pod.yaml:11 image has invalid format 'registry.bigbrother.io/web'",
        "invalid_pod.yaml:13 spec.containers[].ports[].containerPort value out of range",
        "invalid_pod.yaml:14 spec.containers[].ports[].protocol has unsupported value 'SCTP'",
        "invalid_pod.yaml:17 path has invalid format 'healthz'",
        "invalid_pod.yaml:18 port must be int",
        "invalid_pod.yaml:21 spec.containers[].resources.requests.cpu value out of range",
        "invalid_pod.yaml:22 spec.containers[].resources.requests.memory has invalid format '512M'",
        "invalid_pod.yaml: spec.containers[].livenessProbe.httpGet is required",
        "invalid_pod.yaml:27 spec.containers[].resources.limits must be object",
    ];
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_missing_top_level_fields_have_no_line() {
    let output = rendered("metadata:\n  name: web\n");
    assert_eq!(
        output,
        "pod.yaml: apiVersion is required\npod.yaml: kind is required\npod.yaml: spec is required\n"
    );
}

#[test]
fn test_wrong_kinds_at_top_level() {
    let content = "apiVersion: [v1]\nkind: Pod\nmetadata: web\nspec:\n  containers: {}\n";
    assert_eq!(
        rendered(content),
        "pod.yaml:1 apiVersion must be string\n\
         pod.yaml:3 metadata must be object\n\
         pod.yaml:5 spec.containers must be array\n"
    );
}

#[test]
fn test_memory_units() {
    let template = |memory: &str| {
        format!(
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  containers:\n    - name: web\n      image: registry.bigbrother.io/web:1\n      resources:\n        limits:\n          memory: {memory}\n"
        )
    };

    for ok in ["512Mi", "1Gi", "64Ki"] {
        assert_eq!(rendered(&template(ok)), "", "{ok} should be accepted");
    }
    for bad in ["512M", "1G", "1.5Gi", "Mi"] {
        let output = rendered(&template(bad));
        assert_eq!(
            output,
            format!("pod.yaml:11 spec.containers[].resources.limits.memory has invalid format '{bad}'\n")
        );
    }
}

#[test]
fn test_port_bounds() {
    let template = |port: &str| {
        format!(
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  containers:\n    - name: web\n      image: registry.bigbrother.io/web:1\n      ports:\n        - containerPort: {port}\n      resources: {{}}\n"
        )
    };

    assert_eq!(rendered(&template("1")), "");
    assert_eq!(rendered(&template("65535")), "");
    assert_eq!(rendered(&template("\"443\"")), "");
    for bad in ["0", "65536", "-80"] {
        assert_eq!(
            rendered(&template(bad)),
            "pod.yaml:10 spec.containers[].ports[].containerPort value out of range\n"
        );
    }
    assert_eq!(
        rendered(&template("eighty")),
        "pod.yaml:10 spec.containers[].ports[].containerPort must be int\n"
    );
}

#[test]
fn test_numeric_text_reads_leading_integer() {
    let content = "apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/web:1
      ports:
        - containerPort: 80.0
        - containerPort: 0b1010
      resources:
        requests:
          cpu: 0.5
        limits:
          cpu: \"500m\"
";
    assert_eq!(rendered(content), "");

    let fraction_port = content.replace("containerPort: 80.0", "containerPort: 0.8");
    assert_eq!(
        rendered(&fraction_port),
        "pod.yaml:10 spec.containers[].ports[].containerPort value out of range\n"
    );
}

#[test]
fn test_malformed_ports_skips_rest_of_container() {
    let content = "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  containers:\n    - name: web\n      image: registry.bigbrother.io/web:1\n      ports: 8080\n";
    let report = lint_str(content, "pod.yaml").unwrap();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "spec.containers[].ports must be array");
    assert_eq!(report.errors[0].kind, ErrorKind::TypeMismatch);
}

#[test]
fn test_empty_container_name_is_required() {
    let content = "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  containers:\n    - name: \"\"\n      image: registry.bigbrother.io/web:1\n      resources: {}\n";
    let report = lint_str(content, "pod.yaml").unwrap();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::Required);
    assert_eq!(report.errors[0].message, "name is required");
    assert_eq!(report.errors[0].line, Some(7));
}

#[test]
fn test_anchors_and_aliases_resolve() {
    let content = "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  containers:\n    - name: web\n      image: registry.bigbrother.io/web:1\n      resources: &res\n        limits:\n          memory: 128Mi\n    - name: worker\n      image: registry.bigbrother.io/worker:1\n      resources: *res\n";
    assert_eq!(rendered(content), "");
}

fn single_container(name: &str) -> String {
    format!(
        "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  containers:\n    - name: '{name}'\n      image: registry.bigbrother.io/web:1\n      resources: {{}}\n"
    )
}

proptest! {
    #[test]
    fn prop_well_formed_container_names_pass(name in "[a-z0-9]{1,8}(_[a-z0-9]{1,8}){0,2}") {
        let report = lint_str(&single_container(&name), "pod.yaml").unwrap();
        prop_assert!(report.is_valid(), "{:?}", report.errors);
    }

    #[test]
    fn prop_uppercase_container_names_fail(name in "[A-Z][a-zA-Z0-9]{0,8}") {
        let report = lint_str(&single_container(&name), "pod.yaml").unwrap();
        prop_assert_eq!(report.errors.len(), 1);
        prop_assert_eq!(report.errors[0].kind, ErrorKind::InvalidFormat);
        prop_assert_eq!(report.errors[0].line, Some(7));
    }

    #[test]
    fn prop_validation_is_deterministic(port in -100_000i64..100_000) {
        let content = format!(
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  containers:\n    - name: web\n      image: registry.bigbrother.io/web:1\n      ports:\n        - containerPort: {port}\n      resources: {{}}\n"
        );
        let first = lint_str(&content, "pod.yaml").unwrap();
        let second = lint_str(&content, "pod.yaml").unwrap();
        prop_assert_eq!(&first.errors, &second.errors);
        prop_assert_eq!(first.is_valid(), (1..=65535).contains(&port));
    }
}
