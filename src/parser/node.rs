//! Position-tracked YAML node tree.
//!
//! A [`Node`] is one position in a parsed document: a scalar leaf, a mapping
//! of key/value pairs, or a sequence. Every node remembers the 1-based source
//! line it started on so validation errors can point back into the file.

use std::fmt;

/// The structural kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Mapping,
    Sequence,
}

impl NodeKind {
    /// The type name used in "must be ..." messages.
    pub fn readable(&self) -> &'static str {
        match self {
            Self::Scalar => "string",
            Self::Mapping => "object",
            Self::Sequence => "array",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.readable())
    }
}

/// The primitive type the loader inferred for a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarTag {
    Int,
    Float,
    Bool,
    Null,
    #[default]
    Str,
}

impl ScalarTag {
    /// Infer the tag of a plain (unquoted) scalar using YAML 1.2 core schema rules.
    pub fn infer_plain(value: &str) -> Self {
        match value {
            "" | "~" | "null" | "Null" | "NULL" => return Self::Null,
            "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => return Self::Bool,
            ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" | "-.inf" | "-.Inf"
            | "-.INF" | ".nan" | ".NaN" | ".NAN" => return Self::Float,
            _ => {}
        }

        if parse_yaml_int(value).is_some() {
            Self::Int
        } else if looks_like_float(value) {
            Self::Float
        } else {
            Self::Str
        }
    }

    /// Map an explicit core-schema tag suffix (`!!int` -> "int") to a tag.
    pub fn from_core_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "null" => Some(Self::Null),
            "str" => Some(Self::Str),
            _ => None,
        }
    }
}

/// Parse an integer the way a YAML 1.2 core schema integer is written:
/// decimal with optional sign, or `0x` / `0o` prefixed.
pub fn parse_yaml_int(value: &str) -> Option<i64> {
    if let Some(hex) = value.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).ok();
    }
    if let Some(oct) = value.strip_prefix("0o") {
        return i64::from_str_radix(oct, 8).ok();
    }

    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn looks_like_float(value: &str) -> bool {
    let body = value.strip_prefix(['-', '+']).unwrap_or(value);
    body.bytes().any(|b| b.is_ascii_digit())
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'-' | b'+'))
        && value.parse::<f64>().is_ok()
}

/// A key/value pair inside a mapping node.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry {
    pub key: Node,
    pub value: Node,
}

/// Node payload, one variant per [`NodeKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Scalar { text: String, tag: ScalarTag },
    Mapping(Vec<MappingEntry>),
    Sequence(Vec<Node>),
}

/// One position in a parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub value: NodeValue,
    /// 1-based source line; `None` when no reliable location exists.
    pub line: Option<u32>,
}

impl Node {
    pub fn scalar(text: impl Into<String>, tag: ScalarTag, line: Option<u32>) -> Self {
        Self {
            value: NodeValue::Scalar {
                text: text.into(),
                tag,
            },
            line,
        }
    }

    /// A plain scalar with its tag inferred from the text.
    pub fn plain(text: impl Into<String>, line: Option<u32>) -> Self {
        let text = text.into();
        let tag = ScalarTag::infer_plain(&text);
        Self::scalar(text, tag, line)
    }

    pub fn mapping(entries: Vec<MappingEntry>, line: Option<u32>) -> Self {
        Self {
            value: NodeValue::Mapping(entries),
            line,
        }
    }

    pub fn sequence(items: Vec<Node>, line: Option<u32>) -> Self {
        Self {
            value: NodeValue::Sequence(items),
            line,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self.value {
            NodeValue::Scalar { .. } => NodeKind::Scalar,
            NodeValue::Mapping(_) => NodeKind::Mapping,
            NodeValue::Sequence(_) => NodeKind::Sequence,
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.kind() == NodeKind::Scalar
    }

    pub fn is_mapping(&self) -> bool {
        self.kind() == NodeKind::Mapping
    }

    pub fn is_sequence(&self) -> bool {
        self.kind() == NodeKind::Sequence
    }

    /// Raw scalar text, verbatim.
    pub fn as_scalar(&self) -> Option<&str> {
        match &self.value {
            NodeValue::Scalar { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn scalar_tag(&self) -> Option<ScalarTag> {
        match &self.value {
            NodeValue::Scalar { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[MappingEntry]> {
        match &self.value {
            NodeValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.value {
            NodeValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Number of children (mapping entries or sequence items).
    pub fn len(&self) -> usize {
        match &self.value {
            NodeValue::Scalar { .. } => 0,
            NodeValue::Mapping(entries) => entries.len(),
            NodeValue::Sequence(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
