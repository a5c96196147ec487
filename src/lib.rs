//! # yamlvalid
//!
//! Schema validation for Kubernetes Pod manifests written in YAML.
//!
//! ## Features
//!
//! - **Located errors**: every violation carries the 1-based source line of the offending node
//! - **Accumulating**: all violations are reported, in document order, not just the first
//! - **Multi-document**: each `---` separated document is validated as its own Pod
//! - **Multiple formats**: plain lines, JSON, or GitHub Actions annotations
//!
//! ## Example
//!
//! ```rust
//! use yamlvalid::lint_str;
//!
//! let manifest = "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  containers: []\n";
//! let report = lint_str(manifest, "pod.yaml").unwrap();
//! assert!(report.is_valid());
//! ```

pub mod accessor;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod rules;
pub mod types;

// Re-export commonly used types and functions
pub use collector::ErrorCollector;
pub use config::ValidatorConfig;
pub use error::{Result, ValidatorError};
pub use formatter::OutputFormat;
pub use lint::{ValidationReport, lint_file, lint_str};
pub use parser::{Node, parse_documents};
pub use types::{ErrorKind, ValidationError};
