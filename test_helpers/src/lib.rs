//! Test helpers shared across crates in the workspace.
//!
//! - [`figment`] wraps `figment::Jail` for tests that layer options from
//!   files and environment variables.
//! - [`tree`] answers structural questions about merged documents.

pub mod figment;
pub mod tree;
