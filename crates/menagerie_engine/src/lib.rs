//! Simulation rules for Menagerie.
//!
//! This crate provides:
//! - [`lineage`] - Substance application and removal (upgrade, fuse, downgrade)
//! - [`combat`] - Attacks between animals of one container
//! - [`aging`] - The per-period aging and eviction pass
//!
//! Every operation takes the [`World`](menagerie_storage::World) explicitly
//! and reports what happened; none of them print anything.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aging;
pub mod combat;
pub mod lineage;

pub use aging::{Death, PeriodReport, age_container, run_period};
pub use combat::{Combat, attack};
pub use lineage::{Transition, TransitionKind, apply_substance, remove_substance};
