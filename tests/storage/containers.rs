//! Integration tests for Container and Slot
//!
//! Tests policy enforcement, ordering, and positional access.

use menagerie_foundation::{Animal, ContainerKind, ErrorKind, Variant};
use menagerie_storage::{Container, Slot};
use proptest::prelude::*;

// =============================================================================
// Slots
// =============================================================================

#[test]
fn nine_slots_in_period_order() {
    let names: Vec<_> = Slot::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        names,
        vec![
            "Cage/Bird",
            "Cage/BetterBird",
            "Cage/Mouse",
            "Cage/BetterMouse",
            "Aquarium/Fish",
            "Aquarium/BetterFish",
            "Aquarium/Mouse",
            "Aquarium/BetterMouse",
            "Freedom",
        ]
    );
}

#[test]
fn for_animal_routes_and_rejects() {
    assert_eq!(
        Slot::for_animal(ContainerKind::Aquarium, Variant::BetterMouse).unwrap(),
        Slot::enclosure(ContainerKind::Aquarium, Variant::BetterMouse)
    );
    assert_eq!(
        Slot::for_animal(ContainerKind::Freedom, Variant::Fish).unwrap(),
        Slot::FREEDOM
    );
    let err = Slot::for_animal(ContainerKind::Cage, Variant::BetterFish).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn sibling_slots() {
    let cage_mouse = Slot::enclosure(ContainerKind::Cage, Variant::Mouse);
    let cage_better = Slot::enclosure(ContainerKind::Cage, Variant::BetterMouse);
    assert_eq!(cage_mouse.upgraded(), Some(cage_better));
    assert_eq!(cage_better.downgraded(), Some(cage_mouse));
    assert_eq!(Slot::FREEDOM.upgraded(), None);
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn container_rejects_foreign_variants() {
    let mut aquarium = Container::new(Slot::enclosure(ContainerKind::Aquarium, Variant::Fish));
    let err = aquarium
        .insert(Animal::new(Variant::BetterFish, "Dory", 1))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert!(aquarium.is_empty());
}

#[test]
fn container_positions_shift_after_removal() {
    let mut cage = Container::new(Slot::enclosure(ContainerKind::Cage, Variant::Bird));
    for (name, days) in [("c", 3), ("a", 1), ("b", 2)] {
        cage.insert(Animal::new(Variant::Bird, name, days)).unwrap();
    }

    let removed = cage.remove_at(0).unwrap();
    assert_eq!(removed.name(), "a");
    assert_eq!(cage.get(0).unwrap().name(), "b");
    assert_eq!(cage.get(1).unwrap().name(), "c");
    assert!(cage.get(2).is_err());
    assert!(cage.get(-1).is_err());
}

#[test]
fn clear_empties() {
    let mut freedom = Container::new(Slot::FREEDOM);
    freedom.insert(Animal::new(Variant::Monster, "m", 1)).unwrap();
    freedom.clear();
    assert_eq!(freedom.len(), 0);
}

proptest! {
    #[test]
    fn inserts_keep_canonical_order(entries in prop::collection::vec((0u32..12, "[a-d]{1,3}"), 0..40)) {
        let mut freedom = Container::new(Slot::FREEDOM);
        for (days, name) in entries {
            freedom.insert(Animal::new(Variant::Mouse, name, days)).unwrap();
            prop_assert!(freedom.is_sorted());
        }
    }
}
