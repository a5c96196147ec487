//! Typed, kind-checked reads over the loosely-typed [`Node`] tree.
//!
//! Every accessor checks the node kind before consuming a value. On a
//! mismatch it records a violation and returns a failure value so the caller
//! can skip the deeper checks of that one field.

use crate::collector::ErrorCollector;
use crate::parser::{Node, NodeKind, ScalarTag, parse_yaml_int};
use crate::types::ValidationError;

/// Value of the first entry of `mapping` whose key text equals `key`.
///
/// Returns `None` when `mapping` is not a mapping.
pub fn lookup<'a>(mapping: &'a Node, key: &str) -> Option<&'a Node> {
    mapping
        .as_mapping()?
        .iter()
        .find(|entry| entry.key.as_scalar() == Some(key))
        .map(|entry| &entry.value)
}

/// Check that `node` has the `wanted` kind, recording `<field> must be <type>` otherwise.
pub fn expect_kind(
    node: &Node,
    wanted: NodeKind,
    field: &str,
    errors: &mut ErrorCollector,
) -> bool {
    if node.kind() == wanted {
        return true;
    }
    errors.push(ValidationError::wrong_kind(field, wanted, node.line));
    false
}

/// Read a scalar's raw text verbatim.
pub fn expect_scalar_string<'a>(
    node: &'a Node,
    field: &str,
    errors: &mut ErrorCollector,
) -> Option<&'a str> {
    if !expect_kind(node, NodeKind::Scalar, field, errors) {
        return None;
    }
    node.as_scalar()
}

/// Read a scalar as an integer.
///
/// Trusts an integer tag first; anything else falls back to a leading-integer
/// scan so quoted numbers such as `"8080"` and quantities such as `500m` are
/// accepted.
pub fn expect_scalar_int(node: &Node, field: &str, errors: &mut ErrorCollector) -> Option<i64> {
    if !expect_kind(node, NodeKind::Scalar, field, errors) {
        return None;
    }
    let text = node.as_scalar().unwrap_or_default();

    let parsed = match node.scalar_tag() {
        Some(ScalarTag::Int) => parse_yaml_int(text).or_else(|| coerce_int(text)),
        _ => coerce_int(text),
    };

    if parsed.is_none() {
        errors.push(ValidationError::not_int(field, node.line));
    }
    parsed
}

/// Permissive textual integer parse for scalars not tagged as integers.
///
/// Reads the leading integer token and ignores whatever follows it: optional
/// sign, optional `0b` / `0o` / `0x` prefix (a bare leading `0` means octal),
/// then the longest run of digits valid in that base. Underscores may separate
/// digits. `0.5` reads as 0, `500m` as 500 and `80.0` as 80.
pub fn coerce_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, rest, leading_zero) = split_radix_prefix(rest);

    let run_len = rest
        .char_indices()
        .find(|(_, c)| *c != '_' && !c.is_digit(radix))
        .map_or(rest.len(), |(i, _)| i);
    let run = &rest[..run_len];

    if run.is_empty() {
        // A bare `0` is a complete token; `0x` and friends need digits.
        return (leading_zero && radix == 8).then_some(0);
    }

    if !underscores_separate_digits(run, leading_zero) {
        return None;
    }

    let digits: String = run.chars().filter(|c| *c != '_').collect();
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits
    };
    i64::from_str_radix(&signed, radix).ok()
}

/// Strip a base prefix. The flag reports whether a leading `0` was consumed.
fn split_radix_prefix(text: &str) -> (u32, &str, bool) {
    let Some(after_zero) = text.strip_prefix('0') else {
        return (10, text, false);
    };
    match after_zero.as_bytes().first() {
        Some(b'b' | b'B') => (2, &after_zero[1..], true),
        Some(b'o' | b'O') => (8, &after_zero[1..], true),
        Some(b'x' | b'X') => (16, &after_zero[1..], true),
        _ => (8, after_zero, true),
    }
}

/// Each `_` must sit between two digits, or directly after a base prefix.
fn underscores_separate_digits(run: &str, prefixed: bool) -> bool {
    let bytes = run.as_bytes();
    bytes.iter().enumerate().all(|(i, b)| {
        if *b != b'_' {
            return true;
        }
        let after_digit_or_prefix = if i == 0 {
            prefixed
        } else {
            bytes[i - 1] != b'_'
        };
        let before_digit = bytes.get(i + 1).is_some_and(|next| *next != b'_');
        after_digit_or_prefix && before_digit
    })
}
