//! Animals: a name, an age, and a variant tag.
//!
//! Lineage transitions never mutate an animal in place. Each one consumes
//! the old animal and returns a new one, so the caller has to remove the
//! original from its container before the replacement can exist anywhere.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Operation, Result};
use crate::types::{DEFEATED_DAYS, Days, FUSED_DAYS, MAX_DAYS};
use crate::variant::{Stage, Variant};

/// A single animal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Animal {
    name: String,
    days_lived: Days,
    variant: Variant,
}

impl Animal {
    /// Creates an animal.
    #[must_use]
    pub fn new(variant: Variant, name: impl Into<String>, days_lived: Days) -> Self {
        Self {
            name: name.into(),
            days_lived,
            variant,
        }
    }

    /// The animal's name. Names never change across transitions.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days lived so far.
    #[must_use]
    pub const fn days_lived(&self) -> Days {
        self.days_lived
    }

    /// Overwrites the age. Callers holding the animal inside a container
    /// must restore the container's ordering afterwards.
    pub fn set_days_lived(&mut self, days: Days) {
        self.days_lived = days;
    }

    /// The variant tag.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The protocol type code of the variant.
    #[must_use]
    pub const fn type_code(&self) -> &'static str {
        self.variant.code()
    }

    /// Attacks `target`, leaving it at the defeated sentinel age.
    ///
    /// Returns the attacker's variant so the caller can announce the attack.
    pub fn attack(&self, target: &mut Animal) -> Variant {
        target.days_lived = DEFEATED_DAYS;
        self.variant
    }

    /// Whether the animal has been knocked down to the defeated sentinel.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.days_lived == DEFEATED_DAYS
    }

    /// Ages the animal by one day.
    pub fn grow_older(&mut self) {
        self.days_lived = self.days_lived.saturating_add(1);
    }

    /// Whether the animal dies at its current age.
    ///
    /// Fused animals die at any positive age; everything dies past
    /// [`MAX_DAYS`].
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        let fused_expired = matches!(self.variant, Variant::Monster) && self.days_lived > 0;
        fused_expired || self.days_lived > MAX_DAYS
    }

    /// The introduction line printed by TALK and successful CREATE.
    #[must_use]
    pub fn talk(&self) -> String {
        format!("My name is {}, days lived: {}", self.name, self.days_lived)
    }

    /// Consumes a base animal and returns its upgraded counterpart.
    ///
    /// The age is halved, rounding up.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the animal is not a base variant.
    pub fn upgrade(self) -> Result<Self> {
        let variant = self
            .variant
            .upgraded()
            .ok_or_else(|| Error::invalid_transition(self.variant, Operation::ApplySubstance))?;
        Ok(Self {
            name: self.name,
            days_lived: self.days_lived.div_ceil(2),
            variant,
        })
    }

    /// Consumes any animal and returns a fused one with the same name.
    ///
    /// The fused animal always starts at [`FUSED_DAYS`].
    #[must_use]
    pub fn fuse(self) -> Self {
        Self {
            name: self.name,
            days_lived: FUSED_DAYS,
            variant: self.variant.fused(),
        }
    }

    /// Consumes an upgraded animal and returns its base counterpart.
    ///
    /// The age is doubled (saturating). No death check happens here; an
    /// animal pushed past [`MAX_DAYS`] dies at the next period.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the animal is not an upgraded variant.
    pub fn downgrade(self) -> Result<Self> {
        let variant = self
            .variant
            .downgraded()
            .ok_or_else(|| Error::invalid_transition(self.variant, Operation::RemoveSubstance))?;
        Ok(Self {
            name: self.name,
            days_lived: self.days_lived.saturating_mul(2),
            variant,
        })
    }

    /// The lineage stage of this animal's variant.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.variant.stage()
    }

    /// The canonical container ordering: age ascending, then name.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.days_lived
            .cmp(&other.days_lived)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl Ord for Animal {
    /// Canonical ordering, with the variant as a final tie-break so that
    /// `Ord` agrees with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_cmp(other)
            .then_with(|| self.variant.cmp(&other.variant))
    }
}

impl PartialOrd for Animal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} days)", self.variant, self.name, self.days_lived)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn base_variant() -> impl Strategy<Value = Variant> {
        prop_oneof![
            Just(Variant::Fish),
            Just(Variant::Bird),
            Just(Variant::Mouse)
        ]
    }

    proptest! {
        #[test]
        fn upgrade_then_downgrade_is_even_ceiling(variant in base_variant(), days in 0u32..1000) {
            let animal = Animal::new(variant, "x", days);
            let round_trip = animal.upgrade().unwrap().downgrade().unwrap();
            prop_assert_eq!(round_trip.variant(), variant);
            prop_assert_eq!(round_trip.days_lived(), 2 * days.div_ceil(2));
            prop_assert!(round_trip.days_lived() >= days);
            prop_assert_eq!(round_trip.days_lived() == days, days % 2 == 0);
        }

        #[test]
        fn fuse_always_yields_one_day(days in any::<u32>(), idx in 0usize..7) {
            let animal = Animal::new(Variant::ALL[idx], "x", days);
            prop_assert_eq!(animal.fuse().days_lived(), FUSED_DAYS);
        }

        #[test]
        fn ord_agrees_with_canonical(a in 0u32..20, b in 0u32..20, na in "[a-c]{1,2}", nb in "[a-c]{1,2}") {
            let x = Animal::new(Variant::Mouse, na, a);
            let y = Animal::new(Variant::Mouse, nb, b);
            prop_assert_eq!(x.cmp(&y), x.canonical_cmp(&y));
        }
    }
}
