//! Aging integration tests

use menagerie_engine::run_period;
use menagerie_foundation::{Animal, ContainerKind, Variant};
use menagerie_storage::{Slot, World};

#[test]
fn ten_periods_kill_a_newborn_on_the_eleventh() {
    let mut world = World::new();
    let slot = Slot::enclosure(ContainerKind::Cage, Variant::Mouse);
    world.insert(slot, Animal::new(Variant::Mouse, "Pip", 0)).unwrap();

    for _ in 0..10 {
        assert!(run_period(&mut world).unwrap().deaths.is_empty());
    }
    let report = run_period(&mut world).unwrap();
    assert_eq!(report.day, 11);
    assert_eq!(report.deaths.len(), 1);
    assert_eq!(report.deaths[0].slot, slot);
}

#[test]
fn every_slot_ages() {
    let mut world = World::new();
    for slot in Slot::ALL {
        let variant = slot.variant().unwrap_or(Variant::Bird);
        world.insert(slot, Animal::new(variant, slot.to_string(), 4)).unwrap();
    }

    run_period(&mut world).unwrap();
    for container in world.containers() {
        assert_eq!(container.get(0).unwrap().days_lived(), 5);
    }
}
