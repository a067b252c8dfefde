//! Menagerie - typed animal containers driven by a command protocol
//!
//! This crate re-exports all layers of the Menagerie system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: menagerie_runtime     command parser, session, batch input, REPL, CLI
//! Layer 3: menagerie_debug       tracing
//! Layer 2: menagerie_engine      lineage transitions, combat, aging
//! Layer 1: menagerie_storage     containers, slots, world
//! Layer 0: menagerie_foundation  variants, container kinds, animals, errors
//! ```

pub use menagerie_debug as debug;
pub use menagerie_engine as engine;
pub use menagerie_foundation as foundation;
pub use menagerie_runtime as runtime;
pub use menagerie_storage as storage;
