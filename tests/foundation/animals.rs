//! Integration tests for Animal
//!
//! Tests attack, aging rules, ordering, and introductions.

use menagerie_foundation::{Animal, DEFEATED_DAYS, MAX_DAYS, Variant};

#[test]
fn every_variant_attacks_the_same_way() {
    for variant in Variant::ALL {
        let attacker = Animal::new(variant, "a", 1);
        let mut target = Animal::new(Variant::Bird, "t", 3);
        assert_eq!(attacker.attack(&mut target), variant);
        assert_eq!(target.days_lived(), DEFEATED_DAYS);
    }
}

#[test]
fn aging_to_the_limit() {
    let mut animal = Animal::new(Variant::Fish, "Nemo", MAX_DAYS - 1);
    animal.grow_older();
    assert!(!animal.is_expired());
    animal.grow_older();
    assert!(animal.is_expired());
}

#[test]
fn monster_lives_one_period() {
    let mut monster = Animal::new(Variant::BetterBird, "Zazu", 0).fuse();
    assert_eq!(monster.days_lived(), 1);
    monster.grow_older();
    assert!(monster.is_expired());
}

#[test]
fn type_codes() {
    let codes: Vec<_> = Variant::ALL
        .iter()
        .map(|v| Animal::new(*v, "x", 0).type_code())
        .collect();
    assert_eq!(codes, vec!["F", "BF", "B", "BB", "M", "BM", "MON"]);
}

#[test]
fn display_and_talk() {
    let tom = Animal::new(Variant::BetterMouse, "Tom", 2);
    assert_eq!(tom.to_string(), "BetterMouse Tom (2 days)");
    assert_eq!(tom.talk(), "My name is Tom, days lived: 2");
}

#[test]
fn sorting_by_age_then_name() {
    let mut animals = vec![
        Animal::new(Variant::Mouse, "b", 3),
        Animal::new(Variant::Mouse, "a", 3),
        Animal::new(Variant::Mouse, "z", 1),
    ];
    animals.sort();
    let names: Vec<_> = animals.iter().map(Animal::name).collect();
    assert_eq!(names, vec!["z", "a", "b"]);
}
