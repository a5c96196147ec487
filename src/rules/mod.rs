//! The Pod manifest schema, one module per manifest section.
//!
//! | Module       | Section                                   |
//! |--------------|-------------------------------------------|
//! | `top_level`  | document root: apiVersion, kind, ...      |
//! | `metadata`   | `metadata` (ObjectMeta)                   |
//! | `pod_spec`   | `spec` (PodSpec)                          |
//! | `os`         | `spec.os`                                 |
//! | `container`  | `spec.containers[]`                       |
//! | `port`       | `spec.containers[].ports[]`               |
//! | `probe`      | readiness / liveness probes               |
//! | `resources`  | `resources`, `requests`, `limits`         |
//!
//! Each section validator receives the node it owns, checks its kind first,
//! and records violations into the shared collector. A kind mismatch stops
//! that section only; sibling sections are still validated.

pub mod container;
pub mod metadata;
pub mod os;
pub mod pod_spec;
pub mod port;
pub mod probe;
pub mod resources;
pub mod top_level;

use std::sync::LazyLock;

use regex::Regex;

pub use top_level::validate_document;

/// Lowercase alphanumeric segments joined by single underscores.
pub static CONTAINER_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap());

/// Digits followed by a binary memory unit.
pub static MEMORY_QUANTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(Gi|Mi|Ki)$").unwrap());

/// Compile every schema pattern up front.
pub fn init_patterns() {
    LazyLock::force(&CONTAINER_NAME_REGEX);
    LazyLock::force(&MEMORY_QUANTITY_REGEX);
}

/// Inclusive bounds for TCP/UDP port numbers.
pub const PORT_RANGE: std::ops::RangeInclusive<i64> = 1..=65535;
