//! The per-period aging pass.
//!
//! A period visits every container in [`Slot::ALL`] order. Each animal
//! gets one day older; an expired animal is removed on the spot and the
//! same position is examined again, since it now holds the next animal.
//! A final re-sort keeps the container invariant explicit.

use menagerie_foundation::{Animal, Days, Error, ErrorKind, Position, Result, Variant};
use menagerie_storage::{Container, Slot, World};

/// One animal that died of old age.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Death {
    /// The animal's name.
    pub name: String,
    /// Its variant at death.
    pub variant: Variant,
    /// Where it died.
    pub slot: Slot,
    /// Its age at death.
    pub days_lived: Days,
}

/// Everything that happened during one period.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodReport {
    /// The day number the period brought the world to.
    pub day: u64,
    /// Deaths, in the order their notices must be printed.
    pub deaths: Vec<Death>,
}

/// Ages every animal in one container, returning the ones that died.
///
/// # Errors
///
/// Only fails if the container changes size underneath the pass, which
/// would be an internal error.
pub fn age_container(container: &mut Container) -> Result<Vec<Animal>> {
    let mut deaths = Vec::new();
    let mut index = 0usize;

    while index < container.len() {
        let position = Position::try_from(index)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        let animal = container.get_mut(position)?;
        animal.grow_older();

        if animal.is_expired() {
            deaths.push(container.remove_at(position)?);
        } else {
            index += 1;
        }
    }

    container.resort();
    Ok(deaths)
}

/// Runs one period over the whole world.
///
/// # Errors
///
/// Propagates internal errors from [`age_container`].
pub fn run_period(world: &mut World) -> Result<PeriodReport> {
    let day = world.advance_day();
    let mut deaths = Vec::new();

    for slot in Slot::ALL {
        let died = age_container(world.container_mut(slot)?)?;
        for animal in died {
            world.forget(slot, animal.name());
            deaths.push(Death {
                name: animal.name().to_string(),
                variant: animal.variant(),
                slot,
                days_lived: animal.days_lived(),
            });
        }
    }

    Ok(PeriodReport { day, deaths })
}
