//! Tracing integration tests
//!
//! Tests that a traced session records what happened without changing
//! protocol output.

use menagerie::debug::{HumanFormatter, TraceFormatter, Tracer, TracerConfig};
use menagerie::runtime::{Message, Session};

const SCRIPT: [&str; 7] = [
    "CREATE M Tom IN Cage 3",
    "CREATE F Nemo IN Cage 1",
    "APPLY_SUBSTANCE Cage M 0",
    "APPLY_SUBSTANCE Cage BM 0",
    "ATTACK Freedom 0 1",
    "BOGUS",
    "PERIOD",
];

fn run(session: &mut Session) -> Vec<Message> {
    let mut out = Vec::new();
    for line in SCRIPT {
        session.execute_line(line, &mut out).unwrap();
    }
    out
}

#[test]
fn tracing_does_not_change_output() {
    let plain = run(&mut Session::new());
    let traced = run(&mut Session::new().with_tracer(Tracer::new(TracerConfig::new().enabled())));
    assert_eq!(plain, traced);
}

#[test]
fn trace_tells_the_story() {
    let mut session = Session::new().with_tracer(Tracer::new(TracerConfig::new().enabled()));
    run(&mut session);

    let buffer = session.tracer().buffer();
    assert_eq!(buffer.by_event_type("command-start").len(), 7);
    assert_eq!(buffer.by_event_type("created").len(), 1);
    assert_eq!(buffer.by_event_type("rejected").len(), 1);
    assert_eq!(buffer.by_event_type("upgraded").len(), 1);
    assert_eq!(buffer.by_event_type("fused").len(), 1);
    assert_eq!(buffer.by_event_type("command-ignored").len(), 1);
    assert_eq!(buffer.by_event_type("died").len(), 1);

    let died = buffer.by_event_type("died")[0];
    assert_eq!(
        HumanFormatter::new().with_ids().format(died),
        format!("T0001 [{:06}] DIED Tom in Freedom", died.id)
    );
}

#[test]
fn filtered_trace_keeps_only_requested_events() {
    let config = TracerConfig::new()
        .enabled()
        .filter_events(vec!["period-start".to_string(), "period-end".to_string()]);
    let mut session = Session::new().with_tracer(Tracer::new(config));
    run(&mut session);

    let types: Vec<_> = session
        .tracer()
        .buffer()
        .iter()
        .map(|r| r.event_type())
        .collect();
    assert_eq!(types, vec!["period-start", "period-end"]);
}
