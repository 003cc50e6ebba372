//! Ordered application of several patches.
//!
//! A [`PatchComposer`] collects [`PatchLayer`]s, for example a shared overlay
//! followed by an environment-specific one, and applies them to a base
//! document in insertion order with one set of [`MergeOptions`].

use std::sync::Arc;

use serde_json::Value;

use crate::{MergeError, MergeOptions, MergeResult, engine};

/// A patch document with an optional label used in error reports.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchLayer {
    label: Option<String>,
    value: Value,
}

impl PatchLayer {
    /// Create an unlabelled layer.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { label: None, value }
    }

    /// Create a layer named `label`.
    #[must_use]
    pub fn labelled(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    /// Returns the label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the patch document.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// Builder that accumulates [`PatchLayer`] instances.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strategic_merge::{MergeOptions, PatchComposer};
///
/// let mut composer = PatchComposer::new();
/// composer.push(json!({"replicas": 3}));
/// composer.push_labelled("recreate", json!({"strategy": {"type": "Recreate", "rollingUpdate": null}}));
///
/// let base = json!({"replicas": 1, "strategy": {"type": "RollingUpdate", "rollingUpdate": {}}});
/// let merged = composer.compose(&base, &MergeOptions::default())?;
/// assert_eq!(merged, json!({"replicas": 3, "strategy": {"type": "Recreate"}}));
/// # Ok::<_, std::sync::Arc<strategic_merge::MergeError>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatchComposer {
    layers: Vec<PatchLayer>,
}

impl PatchComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Push an unlabelled patch.
    pub fn push(&mut self, value: Value) {
        self.push_layer(PatchLayer::new(value));
    }

    /// Push a labelled patch.
    pub fn push_labelled(&mut self, label: impl Into<String>, value: Value) {
        self.push_layer(PatchLayer::labelled(label, value));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: PatchLayer) {
        self.layers.push(layer);
    }

    /// Layers in application order.
    #[must_use]
    pub fn layers(&self) -> &[PatchLayer] {
        &self.layers
    }

    /// Apply every layer to `base` in order.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Layer`] wrapping the first failure. No partially
    /// merged document is returned.
    pub fn compose(&self, base: &Value, options: &MergeOptions) -> MergeResult<Value> {
        self.layers
            .iter()
            .enumerate()
            .try_fold(base.clone(), |current, (index, layer)| {
                tracing::debug!(index, label = ?layer.label(), "applying patch layer");
                engine::merge_with(&current, layer.value(), options)
                    .map_err(|err| Arc::new(MergeError::layer(index, layer.label(), err)))
            })
    }
}

impl Extend<PatchLayer> for PatchComposer {
    fn extend<T: IntoIterator<Item = PatchLayer>>(&mut self, iter: T) {
        self.layers.extend(iter);
    }
}

impl FromIterator<PatchLayer> for PatchComposer {
    fn from_iter<T: IntoIterator<Item = PatchLayer>>(iter: T) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PatchComposer {
    type Item = PatchLayer;
    type IntoIter = std::vec::IntoIter<PatchLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
