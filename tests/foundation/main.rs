//! Integration tests for Layer 0: Foundation
//!
//! Tests for variants, container kinds, animals, and errors.

mod animals;
mod errors;
mod lineage;
