//! Integration tests for World
//!
//! Tests container lookup, the name directory, and moves between slots.

use menagerie_foundation::{Animal, ContainerKind, ErrorKind, Variant};
use menagerie_storage::{Slot, World};

#[test]
fn move_is_remove_then_insert() {
    let mut world = World::new();
    let from = Slot::enclosure(ContainerKind::Aquarium, Variant::Mouse);
    let to = Slot::FREEDOM;
    world.insert(from, Animal::new(Variant::Mouse, "Stuart", 2)).unwrap();

    let stuart = world.remove_at(from, 0).unwrap();
    world.insert(to, stuart).unwrap();

    assert!(world.container(from).unwrap().is_empty());
    assert_eq!(world.container(to).unwrap().len(), 1);
    assert_eq!(world.lookup("Stuart").unwrap().slot, Slot::FREEDOM);
    assert_eq!(world.animal_count(), 1);
}

#[test]
fn missing_slots_are_errors() {
    let mut world = World::new();
    let cage_fish = Slot::enclosure(ContainerKind::Cage, Variant::Fish);
    assert!(matches!(
        world.container(cage_fish).unwrap_err().kind,
        ErrorKind::NoSuchSlot { .. }
    ));
    assert!(world.drain(cage_fish).is_err());
    assert!(world.remove_at(cage_fish, 0).is_err());
}

#[test]
fn day_counter_advances() {
    let mut world = World::new();
    assert_eq!(world.advance_day(), 1);
    assert_eq!(world.advance_day(), 2);
    assert_eq!(world.day(), 2);
}

#[test]
fn directory_is_ordered_by_name() {
    let mut world = World::new();
    world.insert(Slot::FREEDOM, Animal::new(Variant::Fish, "b", 1)).unwrap();
    world.insert(Slot::FREEDOM, Animal::new(Variant::Fish, "a", 2)).unwrap();
    let names: Vec<_> = world.directory().keys().cloned().collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
}
