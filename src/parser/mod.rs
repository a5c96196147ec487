//! YAML parsing for Pod manifests.
//!
//! Turns raw manifest text into one [`Node`] tree per YAML document, with the
//! source line of every node tracked for error reporting.

pub mod loader;
pub mod node;

pub use loader::load_documents;
pub use node::{MappingEntry, Node, NodeKind, NodeValue, ScalarTag, parse_yaml_int};

use crate::error::{Result, ValidatorError};

/// Parse manifest text into its documents.
///
/// A syntax error is fatal for the whole input and is returned as
/// [`ValidatorError::Parse`] carrying the parser's own diagnostic text.
pub fn parse_documents(content: &str) -> Result<Vec<Node>> {
    load_documents(content).map_err(|err| {
        let message = err.to_string();
        let line = extract_line_number(&message);
        ValidatorError::Parse { message, line }
    })
}

/// Find the line number in a parser diagnostic.
///
/// Looks for the first `"line "` token followed by a positive integer.
pub fn extract_line_number(message: &str) -> Option<u32> {
    const TOKEN: &str = "line ";

    let start = message.find(TOKEN)? + TOKEN.len();
    let digits: String = message[start..]
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse::<u32>().ok().filter(|line| *line > 0)
}
