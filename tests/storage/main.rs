//! Integration tests for Layer 1: Storage
//!
//! Tests for slots, containers, and the world.

mod containers;
mod world;
