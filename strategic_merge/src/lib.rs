//! Null-aware strategic merge patch for structured documents.
//!
//! Documents are [`serde_json::Value`] trees. [`merge`] applies a patch to a
//! base document following strategic merge patch rules: mappings merge key
//! by key, explicit `null` deletes, scalars replace, and sequences of keyed
//! mappings merge element by element. The behaviour is tuned through
//! [`MergeOptions`], which [`OptionsLoader`] can layer from files and the
//! environment.
//!
//! Text documents go through [`codec`], and [`PatchComposer`] applies a stack
//! of patches in order.
//!
//! ```rust
//! use serde_json::json;
//! use strategic_merge::merge;
//!
//! let base = json!({
//!     "spec": {
//!         "strategy": {
//!             "type": "RollingUpdate",
//!             "rollingUpdate": {"maxSurge": 1, "maxUnavailable": 0}
//!         }
//!     }
//! });
//! let patch = json!({
//!     "spec": {"strategy": {"type": "Recreate", "rollingUpdate": null}}
//! });
//!
//! let merged = merge(&base, &patch)?;
//! assert_eq!(merged, json!({"spec": {"strategy": {"type": "Recreate"}}}));
//! # Ok::<_, std::sync::Arc<strategic_merge::MergeError>>(())
//! ```

use std::sync::Arc;

pub use serde_json;

pub mod codec;
mod compose;
pub mod document;
mod engine;
mod error;
mod options;
mod result_ext;

pub use compose::{PatchComposer, PatchLayer};
pub use document::{DocumentPath, Kind, PathSegment};
pub use engine::{Merger, merge, merge_with};
pub use error::MergeError;
pub use options::{
    DEFAULT_ENV_PREFIX, DEFAULT_MERGE_KEY, ListIncreaseDirection, MergeOptions, OptionsLoader,
    SequenceStrategy,
};
pub use result_ext::MergeResultExt;

/// Result alias returned by every fallible operation in this crate.
///
/// Errors are shared behind an [`Arc`] so they can be attached to layer
/// failures and cloned cheaply.
pub type MergeResult<T> = Result<T, Arc<MergeError>>;
