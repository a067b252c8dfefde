//! The batch input protocol: a command count, then that many lines.
//!
//! The count is the first whitespace-separated token of the first
//! non-blank line; the rest of that line is ignored. Each following line
//! is one command, blank lines included. Running out of input ends the
//! batch early.

use std::io::BufRead;

use menagerie_foundation::{Error, ErrorContext, Result};

use crate::message::MessageSink;
use crate::session::Session;

/// Source name used for standard input.
pub const STDIN_SOURCE: &str = "<stdin>";

/// What a batch run got through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// The count the input declared, if it declared a usable one.
    pub declared: Option<usize>,
    /// Command lines actually read and executed.
    pub executed: usize,
}

/// Runs a batch from `reader` against `session`.
///
/// An unusable count executes nothing; it is traced, not reported.
///
/// # Errors
///
/// Returns an `Io` error, tagged with `source` and the line number, if
/// reading fails, and passes through fatal errors from the session.
pub fn run_batch<R: BufRead>(
    session: &mut Session,
    reader: R,
    source: &str,
    sink: &mut dyn MessageSink,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut lines = reader.lines().enumerate();
    let context = |index: usize| ErrorContext::new().with_source(source).with_line(index + 1);

    let count = loop {
        let Some((index, line)) = lines.next() else {
            return Ok(summary);
        };
        let line = line.map_err(|e| Error::io(e.to_string()).with_context(context(index)))?;
        if let Some(token) = line.split_whitespace().next() {
            match token.parse::<usize>() {
                Ok(count) => break count,
                Err(_) => {
                    session
                        .tracer_mut()
                        .command_ignored(&line, "invalid command count");
                    return Ok(summary);
                }
            }
        }
    };
    summary.declared = Some(count);

    for (index, line) in lines.take(count) {
        let line = line.map_err(|e| Error::io(e.to_string()).with_context(context(index)))?;
        session
            .execute_line(&line, sink)
            .map_err(|e| e.with_context(context(index)))?;
        summary.executed += 1;
    }

    Ok(summary)
}
