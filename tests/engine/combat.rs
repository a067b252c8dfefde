//! Combat integration tests

use menagerie_engine::{Combat, attack};
use menagerie_foundation::{Animal, ContainerKind, Variant};
use menagerie_storage::{Slot, World};

#[test]
fn older_attacker_evicts_younger_defender() {
    let mut world = World::new();
    let slot = Slot::enclosure(ContainerKind::Aquarium, Variant::Fish);
    for (name, days) in [("a", 1), ("b", 2), ("c", 3)] {
        world.insert(slot, Animal::new(Variant::Fish, name, days)).unwrap();
    }

    let outcome = attack(&mut world, slot, 2, 0).unwrap();
    assert_eq!(outcome.attacker(), Some(Variant::Fish));
    assert!(matches!(outcome, Combat::Defeated { ref defender, .. } if defender.name() == "a"));

    let names: Vec<_> = world.container(slot).unwrap().iter().map(Animal::name).collect();
    assert_eq!(names, vec!["b", "c"]);
    assert!(world.lookup("a").is_none());
}

#[test]
fn attack_in_missing_slot_fails_without_change() {
    let mut world = World::new();
    let slot = Slot::enclosure(ContainerKind::Aquarium, Variant::Bird);
    assert!(attack(&mut world, slot, 0, 1).is_err());
}
