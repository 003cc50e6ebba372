//! Error types produced by the merge engine and its collaborators.

mod constructors;
mod conversions;
mod types;

pub use types::MergeError;
