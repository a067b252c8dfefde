//! World state: every container plus the name directory.
//!
//! The world is built once and handed to the interpreter by reference;
//! nothing reaches it through globals. Moving an animal between
//! containers is always [`World::remove_at`] followed by
//! [`World::insert`], so no animal is ever held by two containers.

use im::OrdMap;
use menagerie_foundation::{Animal, Error, Position, Result, Variant};

use crate::container::Container;
use crate::slot::Slot;

/// Where a live animal currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The container holding the animal.
    pub slot: Slot,
    /// The animal's current variant.
    pub variant: Variant,
}

/// The complete simulation state.
#[derive(Clone, Debug)]
pub struct World {
    /// One container per [`Slot::ALL`] entry, same order.
    containers: Vec<Container>,
    /// Name -> location of every live animal.
    directory: OrdMap<String, DirectoryEntry>,
    /// Periods elapsed.
    day: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a world with every container empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            containers: Slot::ALL.into_iter().map(Container::new).collect(),
            directory: OrdMap::new(),
            day: 0,
        }
    }

    /// Periods elapsed since the world was created.
    #[must_use]
    pub const fn day(&self) -> u64 {
        self.day
    }

    /// Advances the period counter, returning the new day.
    pub fn advance_day(&mut self) -> u64 {
        self.day += 1;
        self.day
    }

    /// Returns the container for `slot`.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchSlot` if the slot names no container.
    pub fn container(&self, slot: Slot) -> Result<&Container> {
        slot.index()
            .and_then(|i| self.containers.get(i))
            .ok_or_else(|| Error::no_such_slot(slot.kind(), slot.variant()))
    }

    /// Returns the container for `slot` mutably.
    ///
    /// Mutations made through this reference bypass the directory; call
    /// [`World::forget`] for animals removed this way.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchSlot` if the slot names no container.
    pub fn container_mut(&mut self, slot: Slot) -> Result<&mut Container> {
        slot.index()
            .and_then(|i| self.containers.get_mut(i))
            .ok_or_else(|| Error::no_such_slot(slot.kind(), slot.variant()))
    }

    /// Iterates every container in period order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> + '_ {
        self.containers.iter()
    }

    /// Inserts an animal into `slot` and records it in the directory.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchSlot` or `TypeMismatch`; the animal is dropped.
    pub fn insert(&mut self, slot: Slot, animal: Animal) -> Result<()> {
        let entry = DirectoryEntry {
            slot,
            variant: animal.variant(),
        };
        let name = animal.name().to_string();
        self.container_mut(slot)?.insert(animal)?;
        self.directory.insert(name, entry);
        Ok(())
    }

    /// Removes the animal at `position` in `slot` and forgets it.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchSlot` or `IndexOutOfBounds`; nothing changes.
    pub fn remove_at(&mut self, slot: Slot, position: Position) -> Result<Animal> {
        let animal = self.container_mut(slot)?.remove_at(position)?;
        self.forget(slot, animal.name());
        Ok(animal)
    }

    /// Empties `slot`, forgetting everything that was in it.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchSlot` if the slot names no container.
    pub fn drain(&mut self, slot: Slot) -> Result<Vec<Animal>> {
        let drained = self.container_mut(slot)?.drain();
        for animal in &drained {
            self.forget(slot, animal.name());
        }
        Ok(drained)
    }

    /// Updates the directory after an animal called `name` left `slot`.
    ///
    /// Names are not unique. The entry only changes if it points at
    /// `slot`; it then moves to another live animal with the same name,
    /// first in period order, or is dropped when none is left.
    pub fn forget(&mut self, slot: Slot, name: &str) {
        if self.directory.get(name).is_none_or(|entry| entry.slot != slot) {
            return;
        }
        match self.find_named(name) {
            Some(entry) => {
                self.directory.insert(name.to_string(), entry);
            }
            None => {
                self.directory.remove(name);
            }
        }
    }

    fn find_named(&self, name: &str) -> Option<DirectoryEntry> {
        self.containers.iter().find_map(|container| {
            container
                .iter()
                .find(|animal| animal.name() == name)
                .map(|animal| DirectoryEntry {
                    slot: container.slot(),
                    variant: animal.variant(),
                })
        })
    }

    /// Looks up where a live animal is.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<DirectoryEntry> {
        self.directory.get(name).copied()
    }

    /// The full name directory, ordered by name.
    #[must_use]
    pub fn directory(&self) -> &OrdMap<String, DirectoryEntry> {
        &self.directory
    }

    /// Total animals across every container.
    #[must_use]
    pub fn animal_count(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }
}
