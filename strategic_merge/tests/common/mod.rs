//! Shared test fixtures for integration tests.
//!
//! This module provides the Deployment manifests and patches that several
//! integration test files merge, so each file asserts against the same
//! documents.

pub mod deployment_fixtures;
