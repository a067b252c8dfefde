//! Policy-checked, always-sorted animal containers.
//!
//! Contents live in an `im::Vector` so cloning a whole world is cheap.
//! Every insertion re-sorts by the canonical ordering; positions observed
//! before a mutation mean nothing after it.

use im::Vector;
use menagerie_foundation::{Animal, ContainerKind, Error, Position, Result};

use crate::slot::Slot;

/// An ordered collection of animals bound to one [`Slot`].
#[derive(Clone, Debug)]
pub struct Container {
    slot: Slot,
    animals: Vector<Animal>,
}

impl Container {
    /// Creates an empty container for `slot`.
    #[must_use]
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            animals: Vector::new(),
        }
    }

    /// The slot this container serves.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    /// The container's policy kind.
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.slot.kind()
    }

    /// Inserts an animal and restores the canonical ordering.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the slot does not hold this variant. The
    /// animal is dropped in that case.
    pub fn insert(&mut self, animal: Animal) -> Result<()> {
        if !self.slot.accepts(animal.variant()) {
            return Err(Error::type_mismatch(animal.variant(), self.kind()));
        }
        self.animals.push_back(animal);
        self.resort();
        Ok(())
    }

    /// Returns the animal at `position`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `position` is outside `0..len`.
    pub fn get(&self, position: Position) -> Result<&Animal> {
        let index = self.index(position)?;
        self.animals
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(position, self.len()))
    }

    /// Returns the animal at `position` for in-place mutation.
    ///
    /// Changing the age through this reference can break the ordering;
    /// call [`Container::resort`] (or remove the animal) afterwards.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `position` is outside `0..len`.
    pub fn get_mut(&mut self, position: Position) -> Result<&mut Animal> {
        let index = self.index(position)?;
        let length = self.len();
        self.animals
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(position, length))
    }

    /// Removes and returns the animal at `position`, shifting later
    /// animals down by one.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `position` is outside `0..len`.
    pub fn remove_at(&mut self, position: Position) -> Result<Animal> {
        let index = self.index(position)?;
        Ok(self.animals.remove(index))
    }

    /// Removes every animal, returning them in order.
    pub fn drain(&mut self) -> Vec<Animal> {
        std::mem::take(&mut self.animals).into_iter().collect()
    }

    /// Removes every animal.
    pub fn clear(&mut self) {
        self.animals.clear();
    }

    /// Number of animals held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// Returns true if the container holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Iterates in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Animal> + '_ {
        self.animals.iter()
    }

    /// Re-sorts the whole sequence by the canonical ordering.
    pub fn resort(&mut self) {
        self.animals.sort();
    }

    /// Checks the ordering invariant.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.animals
            .iter()
            .zip(self.animals.iter().skip(1))
            .all(|(a, b)| a.canonical_cmp(b).is_le())
    }

    fn index(&self, position: Position) -> Result<usize> {
        usize::try_from(position)
            .ok()
            .filter(|index| *index < self.len())
            .ok_or_else(|| Error::out_of_bounds(position, self.len()))
    }
}
