//! Constructors for `MergeError`.

use std::fmt::Display;
use std::sync::Arc;

use super::MergeError;
use crate::codec::Format;
use crate::document::{DocumentPath, Kind};

impl MergeError {
    /// Report that a `patch` node cannot be merged into a `base` node at `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strategic_merge::{DocumentPath, Kind, MergeError};
    ///
    /// let err = MergeError::type_conflict(&DocumentPath::root(), Kind::Number, Kind::Sequence);
    /// assert!(matches!(
    ///     err,
    ///     MergeError::TypeConflict { base: Kind::Number, patch: Kind::Sequence, .. }
    /// ));
    /// ```
    #[must_use]
    pub fn type_conflict(path: &DocumentPath, base: Kind, patch: Kind) -> Self {
        Self::TypeConflict {
            path: path.clone(),
            base,
            patch,
        }
    }

    /// Report a patch that cannot be applied as written.
    #[must_use]
    pub fn malformed(path: &DocumentPath, reason: impl Into<String>) -> Self {
        Self::MalformedPatch {
            path: path.clone(),
            reason: reason.into(),
        }
    }

    /// Wrap a codec failure for `format`.
    #[must_use]
    pub fn encoding(format: Format, err: impl Display) -> Self {
        Self::Encoding {
            format,
            message: err.to_string(),
        }
    }

    /// Construct an options error from a [`figment::Error`].
    #[must_use]
    pub fn options(source: figment::Error) -> Self {
        Self::Options(Box::new(source))
    }

    /// Attribute `source` to the patch layer at `index`.
    #[must_use]
    pub fn layer(index: usize, label: Option<&str>, source: Arc<Self>) -> Self {
        let name = label.map_or_else(|| format!("#{index}"), ToOwned::to_owned);
        Self::Layer {
            index,
            name,
            source,
        }
    }

    /// Returns the document path for engine errors.
    ///
    /// Layer errors report the path of the error they wrap.
    #[must_use]
    pub fn path(&self) -> Option<&DocumentPath> {
        match self {
            Self::TypeConflict { path, .. } | Self::MalformedPatch { path, .. } => Some(path),
            Self::Layer { source, .. } => source.path(),
            Self::Encoding { .. } | Self::Options(_) => None,
        }
    }
}
