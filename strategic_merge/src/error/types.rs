//! Primary error enum for merge flows.

use std::sync::Arc;

use figment::Error as FigmentError;
use thiserror::Error;

use crate::codec::Format;
use crate::document::{DocumentPath, Kind};

/// Errors that can occur while merging documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// Base and patch have structurally incompatible kinds and strict kind
    /// checking is enabled.
    #[error("type conflict at '{path}': cannot merge a {patch} patch into a {base} base")]
    TypeConflict {
        /// Location of the conflicting node.
        path: DocumentPath,
        /// Kind found in the base document.
        base: Kind,
        /// Kind found in the patch document.
        patch: Kind,
    },

    /// The patch cannot be applied as written.
    #[error("malformed patch at '{path}': {reason}")]
    MalformedPatch {
        /// Location of the offending patch node.
        path: DocumentPath,
        /// Human-readable explanation.
        reason: String,
    },

    /// Failure decoding or encoding document text.
    #[error("{format} codec error: {message}")]
    Encoding {
        /// Serialization format involved.
        format: Format,
        /// Message reported by the underlying codec.
        message: String,
    },

    /// Failure loading [`crate::MergeOptions`] from configuration sources.
    #[error("Failed to load merge options: {0}")]
    Options(#[from] Box<FigmentError>),

    /// A layer of a [`crate::PatchComposer`] stack failed to apply.
    #[error("patch layer '{name}' failed: {source}")]
    Layer {
        /// Zero-based position of the layer in the stack.
        index: usize,
        /// Layer label, or `#<index>` when the layer is unlabelled.
        name: String,
        /// Error reported while applying the layer.
        #[source]
        source: Arc<MergeError>,
    },
}
