//! Substance application and removal.
//!
//! Applying substance to a base animal upgrades it into the sibling
//! better container. Applying it to a better animal fuses it into a
//! Monster in Freedom and wipes out every animal left in the better
//! container it came from. Removing substance downgrades a better animal
//! back into the base container, doubling its age.

use menagerie_foundation::{Animal, Days, Error, Operation, Position, Result, Stage, Variant};
use menagerie_storage::{Slot, World};

/// Which lineage step happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// Base to better.
    Upgrade,
    /// Better to Monster.
    Fuse,
    /// Better to base.
    Downgrade,
}

/// Report of a completed lineage step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Which step happened.
    pub kind: TransitionKind,
    /// Name carried across the step.
    pub name: String,
    /// Container the animal left.
    pub from: Slot,
    /// Container the new animal entered.
    pub to: Slot,
    /// Age of the new animal.
    pub days_lived: Days,
    /// Animals wiped out by a fuse, in their former order.
    pub drained: Vec<Animal>,
}

/// Applies substance to the animal at `position` in `slot`.
///
/// # Errors
///
/// - `PolicyViolation` in Freedom
/// - `NoSuchSlot` if the slot names no container
/// - `IndexOutOfBounds` if nothing is at `position`
///
/// The world is unchanged on error.
pub fn apply_substance(world: &mut World, slot: Slot, position: Position) -> Result<Transition> {
    if !slot.kind().permits_substance() {
        return Err(Error::policy_violation(slot.kind(), Operation::ApplySubstance));
    }
    world.container(slot)?;
    let variant = slot
        .variant()
        .ok_or_else(|| Error::no_such_slot(slot.kind(), None))?;

    match variant.stage() {
        Stage::Base => upgrade(world, slot, position),
        Stage::Better => fuse(world, slot, position),
        Stage::Fused => Err(Error::invalid_transition(variant, Operation::ApplySubstance)),
    }
}

fn upgrade(world: &mut World, slot: Slot, position: Position) -> Result<Transition> {
    let to = slot.upgraded().ok_or_else(|| {
        Error::no_such_slot(slot.kind(), slot.variant().and_then(Variant::upgraded))
    })?;
    let better = world.remove_at(slot, position)?.upgrade()?;
    let transition = Transition {
        kind: TransitionKind::Upgrade,
        name: better.name().to_string(),
        from: slot,
        to,
        days_lived: better.days_lived(),
        drained: Vec::new(),
    };
    world.insert(to, better)?;
    Ok(transition)
}

fn fuse(world: &mut World, slot: Slot, position: Position) -> Result<Transition> {
    let monster = world.remove_at(slot, position)?.fuse();
    let drained = world.drain(slot)?;
    let transition = Transition {
        kind: TransitionKind::Fuse,
        name: monster.name().to_string(),
        from: slot,
        to: Slot::FREEDOM,
        days_lived: monster.days_lived(),
        drained,
    };
    world.insert(Slot::FREEDOM, monster)?;
    Ok(transition)
}

/// Removes substance from the animal at `position` in `slot`.
///
/// The slot's variant decides legality before the position is looked at,
/// so an illegal removal is reported even when `position` is out of range.
///
/// # Errors
///
/// - `PolicyViolation` in Freedom
/// - `InvalidTransition` unless the slot holds a better variant
/// - `IndexOutOfBounds` if nothing is at `position`
///
/// The world is unchanged on error.
pub fn remove_substance(world: &mut World, slot: Slot, position: Position) -> Result<Transition> {
    if !slot.kind().permits_substance() {
        return Err(Error::policy_violation(slot.kind(), Operation::RemoveSubstance));
    }
    let variant = slot
        .variant()
        .ok_or_else(|| Error::no_such_slot(slot.kind(), None))?;
    let to = match slot.downgraded() {
        Some(to) if slot.is_valid() => to,
        _ => return Err(Error::invalid_transition(variant, Operation::RemoveSubstance)),
    };

    let base = world.remove_at(slot, position)?.downgrade()?;
    let transition = Transition {
        kind: TransitionKind::Downgrade,
        name: base.name().to_string(),
        from: slot,
        to,
        days_lived: base.days_lived(),
        drained: Vec::new(),
    };
    world.insert(to, base)?;
    Ok(transition)
}
