//! Session integration tests
//!
//! Commands go in as text; the world and the emitted messages come out.

use menagerie::foundation::{Animal, ContainerKind, Variant};
use menagerie::runtime::{Command, Message, Session};
use menagerie::storage::{Slot, World};
use proptest::prelude::*;

fn execute(session: &mut Session, lines: &[&str]) -> Vec<Message> {
    let mut out = Vec::new();
    for line in lines {
        session.execute_line(line, &mut out).unwrap();
    }
    out
}

#[test]
fn parsed_commands_run_like_lines() {
    let mut by_line = Session::new();
    let mut by_command = Session::new();
    let lines = ["CREATE M Tom IN Cage 3", "APPLY_SUBSTANCE Cage M 0", "TALK Cage BM 0"];

    let expected = execute(&mut by_line, &lines);
    let mut actual = Vec::new();
    for line in lines {
        let command = Command::parse(line).unwrap().unwrap();
        by_command.execute(&command, &mut actual).unwrap();
    }
    assert_eq!(actual, expected);
}

#[test]
fn session_over_prepared_world() {
    let mut world = World::new();
    world
        .insert(
            Slot::enclosure(ContainerKind::Aquarium, Variant::BetterFish),
            Animal::new(Variant::BetterFish, "Dory", 4),
        )
        .unwrap();
    let mut session = Session::with_world(world);

    let out = execute(&mut session, &["REMOVE_SUBSTANCE Aquarium BF 0", "TALK Aquarium F 0"]);
    assert_eq!(
        out,
        vec![Message::Talk {
            name: "Dory".to_string(),
            days_lived: 8
        }]
    );
}

#[test]
fn directory_follows_every_move() {
    let mut session = Session::new();
    execute(
        &mut session,
        &[
            "CREATE B Tweety IN Cage 2",
            "APPLY_SUBSTANCE Cage B 0",
        ],
    );
    let entry = session.world().lookup("Tweety").unwrap();
    assert_eq!(entry.variant, Variant::BetterBird);
    assert_eq!(entry.slot, Slot::enclosure(ContainerKind::Cage, Variant::BetterBird));

    execute(&mut session, &["APPLY_SUBSTANCE Cage BB 0"]);
    assert_eq!(session.world().lookup("Tweety").unwrap().slot, Slot::FREEDOM);

    execute(&mut session, &["PERIOD"]);
    assert!(session.world().directory().is_empty());
}

fn arbitrary_line() -> impl Strategy<Value = String> {
    let kind = prop_oneof![Just("Cage"), Just("Aquarium"), Just("Freedom")];
    let code = prop_oneof![Just("F"), Just("BF"), Just("B"), Just("BB"), Just("M"), Just("BM")];
    prop_oneof![
        (code.clone(), 0u32..12, kind.clone())
            .prop_map(|(c, d, k)| format!("CREATE {c} n{d} IN {k} {d}")),
        (kind.clone(), code.clone(), 0i64..4)
            .prop_map(|(k, c, p)| format!("APPLY_SUBSTANCE {k} {c} {p}")),
        (kind.clone(), code.clone(), 0i64..4)
            .prop_map(|(k, c, p)| format!("REMOVE_SUBSTANCE {k} {c} {p}")),
        (kind, code, 0i64..4, 0i64..4)
            .prop_map(|(k, c, a, b)| format!("ATTACK {k} {c} {a} {b}")),
        Just("PERIOD".to_string()),
    ]
}

proptest! {
    #[test]
    fn containers_stay_sorted_and_policed(lines in prop::collection::vec(arbitrary_line(), 0..60)) {
        let mut session = Session::new();
        let mut out: Vec<Message> = Vec::new();
        for line in &lines {
            session.execute_line(line, &mut out).unwrap();
            for container in session.world().containers() {
                prop_assert!(container.is_sorted());
                for animal in container.iter() {
                    prop_assert!(container.slot().accepts(animal.variant()));
                }
            }
        }
    }
}
