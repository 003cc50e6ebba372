//! `$patch` directives.

use serde_json::Value;

use crate::document::{DIRECTIVE_KEY, as_mapping, is_directive_marker};

/// Instruction carried by a `$patch` entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Directive {
    /// Merge normally; the same as omitting the directive.
    Merge,
    /// Discard the base node and use the patch node.
    Replace,
    /// Remove the node.
    Delete,
}

impl Directive {
    /// Parse a directive value. Unknown values yield `None`.
    pub(super) fn parse(raw: &Value) -> Option<Self> {
        match raw.as_str()? {
            "merge" => Some(Self::Merge),
            "replace" => Some(Self::Replace),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Returns `true` for a bare `{$patch: replace}` sequence element.
pub(super) fn is_replace_marker(value: &Value) -> bool {
    is_directive_marker(value)
        && as_mapping(value)
            .and_then(|map| map.get(DIRECTIVE_KEY))
            .and_then(Directive::parse)
            == Some(Directive::Replace)
}
