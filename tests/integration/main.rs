//! Cross-layer integration tests for Menagerie
//!
//! Tests that drive the whole stack through the root crate's re-exports.

mod sessions;
mod tracing;
