//! Structural queries over decoded documents.
//!
//! Assertions about merge output should inspect the document tree rather
//! than search rendered text, which breaks on key reordering or formatting
//! changes.

use anyhow::{Result, anyhow};
use serde_json::Value;

/// Returns `true` when any mapping in `value`, at any depth, holds `key`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use test_helpers::tree::contains_key;
///
/// let doc = json!({"spec": {"containers": [{"name": "app"}]}});
/// assert!(contains_key(&doc, "name"));
/// assert!(!contains_key(&doc, "rollingUpdate"));
/// ```
#[must_use]
pub fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => {
            map.contains_key(key) || map.values().any(|child| contains_key(child, key))
        }
        Value::Array(items) => items.iter().any(|child| contains_key(child, key)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
    }
}

/// Follows a dotted path of mapping keys, returning the node it names.
///
/// Numeric segments index into sequences.
#[must_use]
pub fn value_at<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(value, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
        })
}

/// Like [`value_at`], but reports the missing path as an error.
///
/// # Errors
///
/// Returns an error naming `dotted` when the path does not resolve.
pub fn require<'a>(value: &'a Value, dotted: &str) -> Result<&'a Value> {
    value_at(value, dotted).ok_or_else(|| anyhow!("document has no node at '{dotted}'"))
}
