//! Structural helpers over [`serde_json::Value`] documents.
//!
//! Documents are plain [`Value`] trees. This module adds the vocabulary the
//! engine needs to reason about them: the structural [`Kind`] of a node and
//! the [`DocumentPath`] that locates it for diagnostics.

mod kind;
mod path;

pub use kind::Kind;
pub use path::{DocumentPath, PathSegment};

use serde_json::{Map, Value};

/// Reserved mapping key carrying strategic merge directives.
pub const DIRECTIVE_KEY: &str = "$patch";

/// Returns the mapping when `value` is an object.
#[must_use]
pub const fn as_mapping(value: &Value) -> Option<&Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Returns `true` when `value` is a mapping that holds `field`.
#[must_use]
pub fn has_field(value: &Value, field: &str) -> bool {
    as_mapping(value).is_some_and(|map| map.contains_key(field))
}

/// Returns `true` when `value` is a mapping whose only entry is a directive.
///
/// Such elements act as markers inside sequences and carry no data.
#[must_use]
pub fn is_directive_marker(value: &Value) -> bool {
    as_mapping(value).is_some_and(|map| map.len() == 1 && map.contains_key(DIRECTIVE_KEY))
}
