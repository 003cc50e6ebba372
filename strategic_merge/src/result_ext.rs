//! Extensions for mapping errors to `MergeResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(MergeError::…(e)))`
//! patterns when converting external error types into the crate's
//! `MergeResult<T>` alias (`Result<T, Arc<MergeError>>`).
//!
//! # Examples
//!
//! ```
//! use strategic_merge::{MergeResult, MergeResultExt};
//!
//! fn parse(text: &str) -> MergeResult<serde_json::Value> {
//!     // serde_json::Error implements Into<MergeError>
//!     serde_json::from_str(text).into_merge()
//! }
//!
//! assert!(parse("{\"a\": 1}").is_ok());
//! assert!(parse("{").is_err());
//! ```

use std::sync::Arc;

use crate::{MergeError, MergeResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<MergeError>` into a `MergeResult<T>`.
pub trait MergeResultExt<T, E> {
    /// Convert `Result<T, E>` into `MergeResult<T>` using `Into<MergeError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<MergeError>`.
    fn into_merge(self) -> MergeResult<T>;
}

impl<T, E> MergeResultExt<T, E> for Result<T, E>
where
    E: Into<MergeError>,
{
    fn into_merge(self) -> MergeResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
