//! Sequence merging: wholesale replacement, keyed merge and positional merge.

use std::sync::Arc;

use serde_json::Value;

use super::Walk;
use super::directive::is_replace_marker;
use crate::document::{Kind, PathSegment, has_field};
use crate::options::{ListIncreaseDirection, SequenceStrategy};
use crate::{MergeError, MergeResult};

impl Walk<'_> {
    pub(super) fn merge_sequence(
        &mut self,
        base: Option<&Value>,
        items: &[Value],
    ) -> MergeResult<Option<Value>> {
        self.check_kinds(base, Kind::Sequence)?;
        if self.options.directives() && items.iter().any(is_replace_marker) {
            tracing::debug!(path = %self.path, "replace directive discards base sequence");
            return self.replace_items(items).map(|kept| Some(Value::Array(kept)));
        }
        let base_items = base.and_then(Value::as_array).map_or(&[][..], Vec::as_slice);
        let merged = match self.options.sequence_strategy() {
            SequenceStrategy::Replace => self.replace_items(items)?,
            SequenceStrategy::MergeByKey => match self.options.merge_key_field() {
                Some(field) => {
                    if self.is_keyed(field, base_items, items)? {
                        tracing::trace!(path = %self.path, field, "merging sequence by key");
                        self.merge_keyed(field, base_items, items)?
                    } else {
                        self.replace_items(items)?
                    }
                }
                None => {
                    tracing::trace!(path = %self.path, "merging sequence by position");
                    self.merge_positional(base_items, items)?
                }
            },
        };
        Ok(Some(Value::Array(merged)))
    }

    /// Build a sequence from the patch alone, dropping replace markers.
    ///
    /// Elements pass through the engine against an absent base, so nested
    /// nulls and directives never reach the output.
    fn replace_items(&mut self, items: &[Value]) -> MergeResult<Vec<Value>> {
        let mut kept = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if self.options.directives() && is_replace_marker(item) {
                continue;
            }
            kept.push(self.merge_element(index, None, item)?);
        }
        Ok(kept)
    }

    /// Decide whether `items` addresses a keyed list.
    ///
    /// A keyed patch is a non-empty sequence of mappings where the merge key
    /// appears on at least one patch or base element. Once keyed, every patch
    /// element must carry the key with a scalar, non-null value.
    fn is_keyed(&self, field: &str, base: &[Value], items: &[Value]) -> MergeResult<bool> {
        if items.is_empty() || !items.iter().all(Value::is_object) {
            return Ok(false);
        }
        let keyed_in_patch = items.iter().any(|item| has_field(item, field));
        let keyed_in_base = base.iter().any(|item| has_field(item, field));
        if !keyed_in_patch && !keyed_in_base {
            return Ok(false);
        }
        for (index, item) in items.iter().enumerate() {
            let reason = match item.get(field) {
                None => format!("element of a keyed sequence lacks merge key '{field}'"),
                Some(key) if !Kind::of(key).is_scalar() => {
                    format!("merge key '{field}' must be a non-null scalar, found {key}")
                }
                Some(_) => continue,
            };
            let path = self.path.join(PathSegment::Index(index));
            return Err(Arc::new(MergeError::malformed(&path, reason)));
        }
        Ok(true)
    }

    /// Merge keyed elements. Base order is preserved; patch-only elements are
    /// placed according to the list increase direction.
    fn merge_keyed(
        &mut self,
        field: &str,
        base: &[Value],
        items: &[Value],
    ) -> MergeResult<Vec<Value>> {
        let mut merged = base.to_vec();
        let mut added: Vec<Value> = Vec::new();
        for item in items {
            let Some(key) = item.get(field) else {
                continue;
            };
            let segment = PathSegment::keyed(field, key);
            let matches = |candidate: &Value| candidate.get(field) == Some(key);
            if let Some(index) = merged.iter().position(matches) {
                self.merge_slot(&mut merged, index, segment, item)?;
            } else if let Some(index) = added.iter().position(matches) {
                self.merge_slot(&mut added, index, segment, item)?;
            } else if let Some(value) = self.descend(segment, |walk| walk.merge_node(None, item))? {
                added.push(value);
            }
        }
        Ok(match self.options.list_increase_direction() {
            ListIncreaseDirection::Append => {
                merged.extend(added);
                merged
            }
            ListIncreaseDirection::Prepend => {
                added.extend(merged);
                added
            }
        })
    }

    /// Merge `item` into `list[index]`, removing the element when the merge
    /// yields nothing.
    fn merge_slot(
        &mut self,
        list: &mut Vec<Value>,
        index: usize,
        segment: PathSegment,
        item: &Value,
    ) -> MergeResult<()> {
        let Some(slot) = list.get_mut(index) else {
            return Ok(());
        };
        let current: &Value = slot;
        match self.descend(segment, |walk| walk.merge_node(Some(current), item))? {
            Some(value) => *slot = value,
            None => {
                tracing::trace!(path = %self.path, index, "patch removes sequence element");
                list.remove(index);
            }
        }
        Ok(())
    }

    /// Merge element `i` of the patch into element `i` of the base.
    ///
    /// `null` elements are kept as values. Extra base elements are kept and
    /// extra patch elements are appended.
    fn merge_positional(&mut self, base: &[Value], items: &[Value]) -> MergeResult<Vec<Value>> {
        let mut merged = Vec::with_capacity(base.len().max(items.len()));
        for (index, item) in items.iter().enumerate() {
            merged.push(self.merge_element(index, base.get(index), item)?);
        }
        merged.extend(base.iter().skip(items.len()).cloned());
        Ok(merged)
    }

    /// Merge one unkeyed element. A `null` element is a value here, and a
    /// delete directive has nothing to address.
    fn merge_element(
        &mut self,
        index: usize,
        base: Option<&Value>,
        item: &Value,
    ) -> MergeResult<Value> {
        if item.is_null() {
            return Ok(Value::Null);
        }
        self.descend(PathSegment::Index(index), |walk| {
            walk.merge_node(base, item)?.ok_or_else(|| {
                Arc::new(MergeError::malformed(
                    &walk.path,
                    "delete directive needs a merge key to identify its target",
                ))
            })
        })
    }
}
