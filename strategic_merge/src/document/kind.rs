//! Structural classification of document nodes.

use std::fmt;

use serde_json::Value;

/// Structural kind of a document node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool,
    /// Numeric scalar.
    Number,
    /// String scalar.
    String,
    /// Ordered sequence of documents.
    Sequence,
    /// Mapping from string keys to documents.
    Mapping,
}

impl Kind {
    /// Classify `value`.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    /// Returns `true` for booleans, numbers and strings.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Bool | Self::Number | Self::String)
    }

    /// Returns `true` when a patch node of kind `patch` may replace or merge
    /// into a base node of this kind without changing its structure.
    ///
    /// Null bases accept anything. Scalars may replace scalars of another
    /// scalar kind; containers only accept a container of the same kind.
    #[must_use]
    pub const fn accepts(self, patch: Self) -> bool {
        match (self, patch) {
            (Self::Null, _) | (_, Self::Null) => true,
            (Self::Sequence, Self::Sequence) | (Self::Mapping, Self::Mapping) => true,
            (base, incoming) => base.is_scalar() && incoming.is_scalar(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        f.write_str(name)
    }
}
