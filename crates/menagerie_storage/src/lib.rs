//! Container storage and world state for Menagerie.
//!
//! This crate provides:
//! - [`Slot`] - Addresses one container by kind and variant
//! - [`Container`] - A policy-checked, always-sorted sequence of animals
//! - [`World`] - Every container plus the name directory

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod container;
pub mod slot;
pub mod world;

pub use container::Container;
pub use slot::Slot;
pub use world::{DirectoryEntry, World};
