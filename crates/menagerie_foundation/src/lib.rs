//! Core types for Menagerie.
//!
//! This crate provides:
//! - [`Variant`] - The closed set of animal kinds and their lineage
//! - [`ContainerKind`] - The three container policies
//! - [`Animal`] - A named, aged entity with a variant tag
//! - [`Error`] - Error types with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod animal;
pub mod error;
pub mod kind;
pub mod types;
pub mod variant;

pub use animal::Animal;
pub use error::{Error, ErrorContext, ErrorKind, Operation, Result};
pub use kind::ContainerKind;
pub use types::{DEFEATED_DAYS, Days, FUSED_DAYS, MAX_DAYS, Position};
pub use variant::{Family, Stage, Variant};
