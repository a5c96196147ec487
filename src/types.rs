//! Core types for reported schema violations.
//!
//! - `ErrorKind` - which class of rule was violated
//! - `ValidationError` - a single violation with its field label and location

use std::fmt;

use serde::Serialize;

use crate::parser::NodeKind;

/// Class of a schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// A required field is absent (or, for container names, empty).
    Required,
    /// A node has the wrong structural kind or is not coercible to int.
    TypeMismatch,
    /// A value lies outside an enumerated set.
    UnsupportedValue,
    /// A value fails a pattern, prefix, or uniqueness rule.
    InvalidFormat,
    /// A numeric value lies outside its inclusive bounds.
    OutOfRange,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TypeMismatch => "type-mismatch",
            Self::UnsupportedValue => "unsupported-value",
            Self::InvalidFormat => "invalid-format",
            Self::OutOfRange => "out-of-range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported violation.
///
/// `message` is the user-facing text and always embeds `field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// 1-based source line; `None` for violations with no location.
    pub line: Option<u32>,
    /// Human-readable field label, e.g. `spec.containers[].image`.
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    fn new(kind: ErrorKind, field: &str, message: String, line: Option<u32>) -> Self {
        Self {
            line,
            field: field.to_string(),
            kind,
            message,
        }
    }

    /// `<field> is required`
    pub fn required(field: &str, line: Option<u32>) -> Self {
        Self::new(
            ErrorKind::Required,
            field,
            format!("{} is required", field),
            line,
        )
    }

    /// `<field> must be <string|object|array>`
    pub fn wrong_kind(field: &str, expected: NodeKind, line: Option<u32>) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            field,
            format!("{} must be {}", field, expected.readable()),
            line,
        )
    }

    /// `<field> must be int`
    pub fn not_int(field: &str, line: Option<u32>) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            field,
            format!("{} must be int", field),
            line,
        )
    }

    /// `<field> has unsupported value '<value>'`
    pub fn unsupported(field: &str, value: &str, line: Option<u32>) -> Self {
        Self::new(
            ErrorKind::UnsupportedValue,
            field,
            format!("{} has unsupported value '{}'", field, value),
            line,
        )
    }

    /// `<field> has invalid format '<value>'`
    pub fn invalid_format(field: &str, value: &str, line: Option<u32>) -> Self {
        Self::new(
            ErrorKind::InvalidFormat,
            field,
            format!("{} has invalid format '{}'", field, value),
            line,
        )
    }

    /// `<field> value out of range`
    pub fn out_of_range(field: &str, line: Option<u32>) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            field,
            format!("{} value out of range", field),
            line,
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
