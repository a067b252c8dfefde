//! Fights between two animals of the same container.

use menagerie_foundation::{Animal, Error, Operation, Position, Result, Variant};
use menagerie_storage::{Slot, World};

/// Outcome of an attack command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Combat {
    /// Attacker and defender were the same position; nothing happened.
    Ignored,
    /// The defender was knocked to the defeated age and removed.
    Defeated {
        /// The attacker's variant, for the announcement.
        attacker: Variant,
        /// The removed defender.
        defender: Animal,
    },
}

impl Combat {
    /// The attacking variant, if an attack took place.
    #[must_use]
    pub fn attacker(&self) -> Option<Variant> {
        match self {
            Self::Ignored => None,
            Self::Defeated { attacker, .. } => Some(*attacker),
        }
    }
}

/// Makes the animal at `attacker` attack the animal at `defender`.
///
/// Checks run in this order: container policy, self-attack, slot
/// existence, then both positions. Nothing changes unless every check
/// passes.
///
/// # Errors
///
/// - `PolicyViolation` in Freedom
/// - `NoSuchSlot` if the slot names no container
/// - `IndexOutOfBounds` if either position is empty
pub fn attack(
    world: &mut World,
    slot: Slot,
    attacker: Position,
    defender: Position,
) -> Result<Combat> {
    if !slot.kind().permits_attack() {
        return Err(Error::policy_violation(slot.kind(), Operation::Attack));
    }
    if attacker == defender {
        return Ok(Combat::Ignored);
    }

    let container = world.container_mut(slot)?;
    let assailant = container.get(attacker)?.clone();
    let variant = assailant.attack(container.get_mut(defender)?);

    // Every hit is fatal, so the defender always leaves the container.
    let defender = world.remove_at(slot, defender)?;
    Ok(Combat::Defeated {
        attacker: variant,
        defender,
    })
}
