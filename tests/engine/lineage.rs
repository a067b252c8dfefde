//! Lineage integration tests
//!
//! Tests substance application and removal across slots.

use menagerie_engine::{TransitionKind, apply_substance, remove_substance};
use menagerie_foundation::{Animal, ContainerKind, ErrorKind, Operation, Variant};
use menagerie_storage::{Slot, World};

fn slot(kind: ContainerKind, variant: Variant) -> Slot {
    Slot::enclosure(kind, variant)
}

#[test]
fn full_lineage_of_a_bird() {
    let mut world = World::new();
    let base = slot(ContainerKind::Cage, Variant::Bird);
    let better = slot(ContainerKind::Cage, Variant::BetterBird);
    world.insert(base, Animal::new(Variant::Bird, "Tweety", 9)).unwrap();

    let up = apply_substance(&mut world, base, 0).unwrap();
    assert_eq!((up.kind, up.to, up.days_lived), (TransitionKind::Upgrade, better, 5));

    let down = remove_substance(&mut world, better, 0).unwrap();
    assert_eq!((down.kind, down.to, down.days_lived), (TransitionKind::Downgrade, base, 10));

    apply_substance(&mut world, base, 0).unwrap();
    let fused = apply_substance(&mut world, better, 0).unwrap();
    assert_eq!(fused.kind, TransitionKind::Fuse);
    assert_eq!(fused.to, Slot::FREEDOM);
    assert_eq!(world.lookup("Tweety").unwrap().variant, Variant::Monster);
}

#[test]
fn fuse_leaves_other_kinds_alone() {
    let mut world = World::new();
    let cage_better = slot(ContainerKind::Cage, Variant::BetterMouse);
    let aquarium_better = slot(ContainerKind::Aquarium, Variant::BetterMouse);
    world.insert(cage_better, Animal::new(Variant::BetterMouse, "x", 1)).unwrap();
    world.insert(cage_better, Animal::new(Variant::BetterMouse, "y", 2)).unwrap();
    world
        .insert(aquarium_better, Animal::new(Variant::BetterMouse, "z", 3))
        .unwrap();

    let fused = apply_substance(&mut world, cage_better, 0).unwrap();
    let drained: Vec<_> = fused.drained.iter().map(Animal::name).collect();
    assert_eq!(drained, vec!["y"]);
    assert_eq!(world.container(aquarium_better).unwrap().len(), 1);
}

#[test]
fn freedom_refuses_both_directions() {
    let mut world = World::new();
    for (result, operation) in [
        (apply_substance(&mut world, Slot::FREEDOM, 0), Operation::ApplySubstance),
        (remove_substance(&mut world, Slot::FREEDOM, 0), Operation::RemoveSubstance),
    ] {
        let err = result.unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::PolicyViolation { operation: op, .. } if op == operation
        ));
    }
}
