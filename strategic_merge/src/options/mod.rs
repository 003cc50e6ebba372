//! Configuration for the merge engine.
//!
//! [`MergeOptions`] selects how sequences merge and whether strategic merge
//! directives are honoured. Options serialise with camelCase names so they
//! can be written alongside manifests; [`OptionsLoader`] layers them from
//! files and environment variables.

mod loader;

pub use loader::{DEFAULT_ENV_PREFIX, OptionsLoader};

use serde::{Deserialize, Serialize};

/// Merge key used when none is configured.
pub const DEFAULT_MERGE_KEY: &str = "name";

/// How patch sequences combine with base sequences.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceStrategy {
    /// Patch sequences replace base sequences wholesale.
    Replace,
    /// Sequences of keyed mappings merge element-by-element on the merge key;
    /// without a merge key, sequences merge by position.
    #[default]
    MergeByKey,
}

/// Where elements that exist only in the patch are placed in a keyed merge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListIncreaseDirection {
    /// New elements follow the base elements.
    #[default]
    Append,
    /// New elements precede the base elements.
    Prepend,
}

/// Options controlling a merge.
///
/// # Examples
///
/// ```
/// use strategic_merge::{MergeOptions, SequenceStrategy};
///
/// let options = MergeOptions::default()
///     .with_sequence_strategy(SequenceStrategy::Replace)
///     .with_strict_kinds(true);
/// assert_eq!(options.merge_key_field(), Some("name"));
/// assert!(options.strict_kinds());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MergeOptions {
    sequence_strategy: SequenceStrategy,
    merge_key_field: Option<String>,
    list_increase_direction: ListIncreaseDirection,
    strict_kinds: bool,
    directives: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            sequence_strategy: SequenceStrategy::default(),
            merge_key_field: Some(DEFAULT_MERGE_KEY.to_owned()),
            list_increase_direction: ListIncreaseDirection::default(),
            strict_kinds: false,
            directives: true,
        }
    }
}

impl MergeOptions {
    /// Select the sequence strategy.
    #[must_use]
    pub const fn with_sequence_strategy(mut self, strategy: SequenceStrategy) -> Self {
        self.sequence_strategy = strategy;
        self
    }

    /// Set the merge key field. `None` switches keyed merging to positional
    /// merging.
    #[must_use]
    pub fn with_merge_key_field<S: Into<String>>(mut self, field: Option<S>) -> Self {
        self.merge_key_field = field.map(Into::into);
        self
    }

    /// Choose where patch-only elements land in keyed merges.
    #[must_use]
    pub const fn with_list_increase_direction(mut self, direction: ListIncreaseDirection) -> Self {
        self.list_increase_direction = direction;
        self
    }

    /// Reject structurally incompatible base and patch nodes instead of
    /// letting the patch win.
    #[must_use]
    pub const fn with_strict_kinds(mut self, strict: bool) -> Self {
        self.strict_kinds = strict;
        self
    }

    /// Toggle handling of `$patch` directives.
    #[must_use]
    pub const fn with_directives(mut self, enabled: bool) -> Self {
        self.directives = enabled;
        self
    }

    /// Configured sequence strategy.
    #[must_use]
    pub const fn sequence_strategy(&self) -> SequenceStrategy {
        self.sequence_strategy
    }

    /// Configured merge key field. An empty name counts as unset.
    #[must_use]
    pub fn merge_key_field(&self) -> Option<&str> {
        self.merge_key_field
            .as_deref()
            .filter(|field| !field.is_empty())
    }

    /// Placement of patch-only elements in keyed merges.
    #[must_use]
    pub const fn list_increase_direction(&self) -> ListIncreaseDirection {
        self.list_increase_direction
    }

    /// Whether incompatible kinds are reported as errors.
    #[must_use]
    pub const fn strict_kinds(&self) -> bool {
        self.strict_kinds
    }

    /// Whether `$patch` directives are honoured.
    #[must_use]
    pub const fn directives(&self) -> bool {
        self.directives
    }
}
