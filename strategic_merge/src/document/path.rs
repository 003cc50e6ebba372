//! Locations inside a document, used to report where a merge failed.

use std::fmt;

use serde_json::Value;

/// One step from a node to one of its children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
    /// Mapping entry.
    Key(String),
    /// Sequence element addressed by position.
    Index(usize),
    /// Sequence element addressed by its merge key.
    Keyed {
        /// Merge key field name.
        field: String,
        /// Rendered merge key value.
        value: String,
    },
}

impl PathSegment {
    /// Build a keyed segment, rendering scalar keys without JSON quoting.
    #[must_use]
    pub fn keyed(field: &str, value: &Value) -> Self {
        let rendered = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        Self::Keyed {
            field: field.to_owned(),
            value: rendered,
        }
    }
}

/// Path from the document root to a node.
///
/// Renders as `spec.template.spec.containers[name=test].image`; the root
/// renders as `.`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DocumentPath {
    segments: Vec<PathSegment>,
}

impl DocumentPath {
    /// The document root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Append `segment`.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Remove the last segment, if any.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Returns a copy of this path extended by `segment`.
    #[must_use]
    pub fn join(&self, segment: PathSegment) -> Self {
        let mut joined = self.clone();
        joined.push(segment);
        joined
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Keyed { field, value } => write!(f, "[{field}={value}]")?,
            }
        }
        Ok(())
    }
}
