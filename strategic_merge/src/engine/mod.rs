//! Strategic merge of a patch document into a base document.
//!
//! The engine walks the patch and the base together and builds a fresh
//! merged document. Neither input is modified.
//!
//! - An explicit `null` in the patch deletes the corresponding key.
//! - Mappings merge key by key. Every key is handled on its own, so a
//!   sibling that changes value (for example a `type` discriminator) never
//!   affects how a nulled sibling is removed.
//! - Scalars replace the base value.
//! - Sequences replace the base sequence unless they hold mappings carrying
//!   the configured merge key, in which case elements merge by key. Without a
//!   merge key, sequences merge by position.
//! - `$patch: delete | replace | merge` directives adjust the behaviour for a
//!   single node.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use strategic_merge::merge;
//!
//! let base = json!({"type": "RollingUpdate", "rollingUpdate": {"maxSurge": 1}});
//! let patch = json!({"type": "Recreate", "rollingUpdate": null});
//! assert_eq!(merge(&base, &patch)?, json!({"type": "Recreate"}));
//! # Ok::<_, std::sync::Arc<strategic_merge::MergeError>>(())
//! ```

mod directive;
mod sequence;

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::document::{DIRECTIVE_KEY, DocumentPath, Kind, PathSegment, as_mapping};
use crate::{MergeError, MergeOptions, MergeResult};

use directive::Directive;

/// Merge `patch` into `base` using [`MergeOptions::default`].
///
/// An explicit `null` patch at the root yields `null`.
///
/// # Errors
///
/// Returns [`MergeError::MalformedPatch`] when the patch cannot be applied as
/// written.
pub fn merge(base: &Value, patch: &Value) -> MergeResult<Value> {
    Merger::default().merge(base, patch)
}

/// Merge `patch` into `base` using `options`.
///
/// # Errors
///
/// Returns [`MergeError::TypeConflict`] when strict kind checking rejects a
/// node and [`MergeError::MalformedPatch`] when the patch cannot be applied
/// as written.
pub fn merge_with(base: &Value, patch: &Value, options: &MergeOptions) -> MergeResult<Value> {
    Walk::new(options).merge_root(base, patch)
}

/// Reusable merge entry point holding its options.
///
/// A `Merger` keeps no state between calls and may be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    /// Create a merger using `options`.
    #[must_use]
    pub const fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Options applied by this merger.
    #[must_use]
    pub const fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Merge `patch` into `base`.
    ///
    /// # Errors
    ///
    /// See [`merge_with`].
    pub fn merge(&self, base: &Value, patch: &Value) -> MergeResult<Value> {
        merge_with(base, patch, &self.options)
    }
}

/// State for a single traversal: the options and the current location.
struct Walk<'a> {
    options: &'a MergeOptions,
    path: DocumentPath,
}

impl<'a> Walk<'a> {
    const fn new(options: &'a MergeOptions) -> Self {
        Self {
            options,
            path: DocumentPath::root(),
        }
    }

    fn merge_root(&mut self, base: &Value, patch: &Value) -> MergeResult<Value> {
        tracing::debug!(
            strategy = ?self.options.sequence_strategy(),
            merge_key = ?self.options.merge_key_field(),
            strict = self.options.strict_kinds(),
            "merging patch into base document"
        );
        Ok(self.merge_node(Some(base), patch)?.unwrap_or(Value::Null))
    }

    /// Merge one node. `None` in either position means "absent".
    fn merge_node(&mut self, base: Option<&Value>, patch: &Value) -> MergeResult<Option<Value>> {
        match patch {
            Value::Null => Ok(None),
            Value::Object(entries) => self.merge_mapping(base, entries),
            Value::Array(items) => self.merge_sequence(base, items),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                self.check_kinds(base, Kind::of(patch))?;
                Ok(Some(patch.clone()))
            }
        }
    }

    fn merge_mapping(
        &mut self,
        base: Option<&Value>,
        patch: &Map<String, Value>,
    ) -> MergeResult<Option<Value>> {
        match self.directive(patch)? {
            Some(Directive::Delete) => {
                tracing::debug!(path = %self.path, "delete directive removes node");
                return Ok(None);
            }
            Some(Directive::Replace) => {
                tracing::debug!(path = %self.path, "replace directive discards base node");
                return self.merge_entries(&Map::new(), patch).map(|m| Some(Value::Object(m)));
            }
            Some(Directive::Merge) | None => {}
        }
        self.check_kinds(base, Kind::Mapping)?;
        let empty = Map::new();
        let base_entries = base.and_then(as_mapping).unwrap_or(&empty);
        self.merge_entries(base_entries, patch)
            .map(|m| Some(Value::Object(m)))
    }

    /// Merge the entries of two mappings.
    ///
    /// Base keys keep their position; keys new in the patch follow in patch
    /// order. Each patch key is merged on its own.
    fn merge_entries(
        &mut self,
        base: &Map<String, Value>,
        patch: &Map<String, Value>,
    ) -> MergeResult<Map<String, Value>> {
        let mut merged = Map::with_capacity(base.len() + patch.len());
        for (key, base_value) in base {
            let incoming = if self.is_directive_key(key) {
                None
            } else {
                patch.get(key)
            };
            match incoming {
                None => {
                    merged.insert(key.clone(), base_value.clone());
                }
                Some(patch_value) => {
                    if let Some(value) = self.merge_entry(key, Some(base_value), patch_value)? {
                        merged.insert(key.clone(), value);
                    }
                }
            }
        }
        for (key, patch_value) in patch {
            if base.contains_key(key) || self.is_directive_key(key) {
                continue;
            }
            if let Some(value) = self.merge_entry(key, None, patch_value)? {
                merged.insert(key.clone(), value);
            }
        }
        Ok(merged)
    }

    fn merge_entry(
        &mut self,
        key: &str,
        base: Option<&Value>,
        patch: &Value,
    ) -> MergeResult<Option<Value>> {
        self.descend(PathSegment::Key(key.to_owned()), |walk| {
            let merged = walk.merge_node(base, patch)?;
            if merged.is_none() && base.is_some() {
                tracing::trace!(path = %walk.path, "patch removes key");
            }
            Ok(merged)
        })
    }

    /// Run `step` with `segment` appended to the current path.
    fn descend<T>(
        &mut self,
        segment: PathSegment,
        step: impl FnOnce(&mut Self) -> MergeResult<T>,
    ) -> MergeResult<T> {
        self.path.push(segment);
        let result = step(self);
        self.path.pop();
        result
    }

    fn is_directive_key(&self, key: &str) -> bool {
        self.options.directives() && key == DIRECTIVE_KEY
    }

    fn directive(&self, patch: &Map<String, Value>) -> MergeResult<Option<Directive>> {
        if !self.options.directives() {
            return Ok(None);
        }
        patch
            .get(DIRECTIVE_KEY)
            .map(|raw| {
                Directive::parse(raw).ok_or_else(|| {
                    let path = self.path.join(PathSegment::Key(DIRECTIVE_KEY.to_owned()));
                    Arc::new(MergeError::malformed(
                        &path,
                        format!("unsupported {DIRECTIVE_KEY} directive {raw}"),
                    ))
                })
            })
            .transpose()
    }

    /// Enforce structural compatibility when strict kind checking is on.
    fn check_kinds(&self, base: Option<&Value>, patch: Kind) -> MergeResult<()> {
        if !self.options.strict_kinds() {
            return Ok(());
        }
        let Some(base_value) = base else {
            return Ok(());
        };
        let base_kind = Kind::of(base_value);
        if base_kind.accepts(patch) {
            Ok(())
        } else {
            Err(Arc::new(MergeError::type_conflict(&self.path, base_kind, patch)))
        }
    }
}
