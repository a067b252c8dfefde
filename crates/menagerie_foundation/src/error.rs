//! Error types for the Menagerie system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Almost every kind is recovered by the interpreter and turned into a
//! protocol message (or silence); see [`ErrorKind`] for which is which.

use std::fmt;

use thiserror::Error;

use crate::kind::ContainerKind;
use crate::types::Position;
use crate::variant::Variant;

/// Result alias used throughout Menagerie.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Menagerie operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(variant: Variant, kind: ContainerKind) -> Self {
        Self::new(ErrorKind::TypeMismatch { variant, kind })
    }

    /// Creates a missing container error.
    #[must_use]
    pub fn no_such_slot(kind: ContainerKind, variant: Option<Variant>) -> Self {
        Self::new(ErrorKind::NoSuchSlot { kind, variant })
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn out_of_bounds(index: Position, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates a policy violation error.
    #[must_use]
    pub fn policy_violation(kind: ContainerKind, operation: Operation) -> Self {
        Self::new(ErrorKind::PolicyViolation { kind, operation })
    }

    /// Creates an invalid transition error.
    #[must_use]
    pub fn invalid_transition(variant: Variant, operation: Operation) -> Self {
        Self::new(ErrorKind::InvalidTransition { variant, operation })
    }

    /// Creates a parse error for the given input line.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line: line.into(),
        })
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this error ends the run rather than a single command.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_) | ErrorKind::Internal(_))
    }
}

/// Operations a container policy can forbid or a lineage can lack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Substance application (upgrade or fuse).
    ApplySubstance,
    /// Substance removal (downgrade).
    RemoveSubstance,
    /// Combat between two animals of one container.
    Attack,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApplySubstance => write!(f, "apply substance"),
            Self::RemoveSubstance => write!(f, "remove substance"),
            Self::Attack => write!(f, "attack"),
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A container's policy refused the inserted variant. Recovered silently.
    #[error("type mismatch: {kind} cannot hold {variant}")]
    TypeMismatch {
        /// The variant that was offered.
        variant: Variant,
        /// The container kind that refused it.
        kind: ContainerKind,
    },

    /// No container exists for this (kind, variant) pair. Recovered silently.
    #[error("no {kind} container for {}", .variant.map_or("mixed animals", Variant::name))]
    NoSuchSlot {
        /// The container kind named.
        kind: ContainerKind,
        /// The variant named, if any.
        variant: Option<Variant>,
    },

    /// Position outside the container. Reported as "Animal not found".
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The position that was accessed.
        index: Position,
        /// The actual length of the container.
        length: usize,
    },

    /// Operation forbidden by the container kind. Reported as a refusal.
    #[error("{operation} is not permitted in {kind}")]
    PolicyViolation {
        /// The container kind.
        kind: ContainerKind,
        /// The refused operation.
        operation: Operation,
    },

    /// The variant has no lineage step for this operation.
    #[error("cannot {operation} on {variant}")]
    InvalidTransition {
        /// The variant the operation targeted.
        variant: Variant,
        /// The attempted operation.
        operation: Operation,
    },

    /// Malformed command line. Ignored by the interpreter.
    #[error("parse error: {message} in {line:?}")]
    ParseError {
        /// Description of the problem.
        message: String,
        /// The offending input line.
        line: String,
    },

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Input source name (file path or `<stdin>`).
    pub source: Option<String>,
    /// Line number in the source (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
