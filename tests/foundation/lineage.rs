//! Integration tests for the variant lineage
//!
//! Tests upgrade, fuse, and downgrade across families and kinds.

use menagerie_foundation::{Animal, ContainerKind, Family, Stage, Variant};
use proptest::prelude::*;

#[test]
fn lineage_chain_per_family() {
    for family in [Family::Fish, Family::Bird, Family::Mouse] {
        let base = family.base();
        let better = family.better();
        assert_eq!(base.stage(), Stage::Base);
        assert_eq!(better.stage(), Stage::Better);
        assert_eq!(base.upgraded(), Some(better));
        assert_eq!(better.downgraded(), Some(base));
        assert_eq!(better.upgraded(), None);
        assert_eq!(base.fused(), Variant::Monster);
    }
}

#[test]
fn seven_day_round_trip_is_lossy() {
    let fish = Animal::new(Variant::Fish, "Nemo", 7);
    let better = fish.upgrade().unwrap();
    assert_eq!(better.days_lived(), 4);
    assert_eq!(better.downgrade().unwrap().days_lived(), 8);
}

#[test]
fn kinds_accept_their_families() {
    assert!(ContainerKind::Cage.accepts(Variant::BetterBird));
    assert!(ContainerKind::Cage.accepts(Variant::Mouse));
    assert!(!ContainerKind::Cage.accepts(Variant::Fish));
    assert!(ContainerKind::Aquarium.accepts(Variant::BetterFish));
    assert!(!ContainerKind::Aquarium.accepts(Variant::Bird));
    for variant in Variant::ALL {
        assert!(ContainerKind::Freedom.accepts(variant));
    }
    assert!(!ContainerKind::Freedom.permits_substance());
    assert!(!ContainerKind::Freedom.permits_attack());
}

#[test]
fn codes_round_trip() {
    for variant in Variant::ALL {
        assert_eq!(Variant::from_code(variant.code()), Some(variant));
    }
    assert_eq!(Variant::from_code("X"), None);
}

proptest! {
    #[test]
    fn upgrade_halves_rounding_up(days in 0u32..10_000) {
        let better = Animal::new(Variant::Mouse, "m", days).upgrade().unwrap();
        prop_assert_eq!(better.days_lived(), days.div_ceil(2));
    }

    #[test]
    fn downgrade_doubles(days in 0u32..10_000) {
        let base = Animal::new(Variant::BetterBird, "b", days).downgrade().unwrap();
        prop_assert_eq!(base.days_lived(), days * 2);
    }
}
