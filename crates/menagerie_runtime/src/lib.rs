//! Command interpreter, REPL, and CLI for Menagerie.
//!
//! This crate provides:
//! - [`Command`] - Parsing of protocol lines
//! - [`Session`] - Command execution against a world
//! - [`run_batch`] - The counted batch protocol
//! - [`Repl`] - Interactive read-eval-print loop
//! - The `menagerie` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod dump;
pub mod editor;
pub mod input;
pub mod message;
pub mod repl;
pub mod session;

pub use command::{Command, VERBS};
pub use dump::render_world;
pub use editor::{LineEditor, ReadResult, RustylineEditor, protocol_words};
pub use input::{BatchSummary, STDIN_SOURCE, run_batch};
pub use message::{Message, MessageSink, WriterSink};
pub use repl::Repl;
pub use session::Session;
