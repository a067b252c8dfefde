//! Integration tests for Layer 2: Engine
//!
//! Tests for lineage transitions, combat, and aging across the world.

mod aging;
mod combat;
mod lineage;
