//! Integration tests for Error types
//!
//! Tests error construction, display, context, and fatality.

use menagerie_foundation::{ContainerKind, Error, ErrorContext, ErrorKind, Operation, Variant};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(Variant::Fish, ContainerKind::Cage);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("Cage") && msg.contains("Fish"));
}

#[test]
fn error_no_such_slot() {
    let err = Error::no_such_slot(ContainerKind::Aquarium, Some(Variant::Bird));
    assert_eq!(format!("{err}"), "no Aquarium container for Bird");

    let mixed = Error::no_such_slot(ContainerKind::Freedom, None);
    assert!(format!("{mixed}").contains("mixed animals"));
}

#[test]
fn error_out_of_bounds() {
    let err = Error::out_of_bounds(-1, 3);
    assert!(matches!(
        err.kind,
        ErrorKind::IndexOutOfBounds {
            index: -1,
            length: 3
        }
    ));
}

#[test]
fn error_policy_violation() {
    let err = Error::policy_violation(ContainerKind::Freedom, Operation::Attack);
    assert_eq!(format!("{err}"), "attack is not permitted in Freedom");
}

#[test]
fn error_invalid_transition() {
    let err = Error::invalid_transition(Variant::Mouse, Operation::RemoveSubstance);
    assert_eq!(format!("{err}"), "cannot remove substance on Mouse");
}

#[test]
fn error_parse_keeps_line() {
    let err = Error::parse("missing position", "TALK Cage M");
    match err.kind {
        ErrorKind::ParseError { message, line } => {
            assert_eq!(message, "missing position");
            assert_eq!(line, "TALK Cage M");
        }
        other => panic!("unexpected kind {other:?}"),
    }
}

// =============================================================================
// Context and Fatality
// =============================================================================

#[test]
fn context_attaches() {
    let err = Error::io("broken pipe")
        .with_context(ErrorContext::new().with_source("<stdin>").with_line(4));
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("<stdin>"));
    assert_eq!(context.line, Some(4));
}

#[test]
fn only_io_and_internal_are_fatal() {
    assert!(Error::io("x").is_fatal());
    assert!(Error::new(ErrorKind::Internal("x".to_string())).is_fatal());
    assert!(!Error::out_of_bounds(0, 0).is_fatal());
    assert!(!Error::parse("x", "y").is_fatal());
    assert!(!Error::policy_violation(ContainerKind::Freedom, Operation::ApplySubstance).is_fatal());
}
