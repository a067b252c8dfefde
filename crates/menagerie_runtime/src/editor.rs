//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation and tests substitute scripted editors.

use std::borrow::Cow;

use menagerie_foundation::{ContainerKind, Error, ErrorKind, Result, Variant};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::command::VERBS;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);
}

/// Every word the protocol knows: verbs, the `IN` connective, container
/// kinds and creatable type codes.
#[must_use]
pub fn protocol_words() -> Vec<String> {
    VERBS
        .iter()
        .copied()
        .chain(["IN"])
        .chain(ContainerKind::ALL.iter().map(|k| k.name()))
        .chain(
            Variant::ALL
                .iter()
                .filter(|v| v.is_creatable())
                .map(|v| v.code()),
        )
        .map(String::from)
        .collect()
}

#[derive(Helper, Completer, Hinter, Validator)]
struct MenagerieHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for MenagerieHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut out = String::with_capacity(line.len() * 2);
        let mut rest = line;

        while !rest.is_empty() {
            let split = rest
                .find(|c: char| c.is_whitespace() != rest.starts_with(char::is_whitespace))
                .unwrap_or(rest.len());
            let (chunk, tail) = rest.split_at(split);
            match word_color(chunk) {
                Some(color) => {
                    out.push_str(color);
                    out.push_str(chunk);
                    out.push_str("\x1b[0m");
                }
                None => out.push_str(chunk),
            }
            rest = tail;
        }

        Cow::Owned(out)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// ANSI color for one token, if it is a protocol word or a number.
fn word_color(word: &str) -> Option<&'static str> {
    if VERBS.contains(&word) {
        Some("\x1b[1;35m")
    } else if ContainerKind::from_name(word).is_some() {
        Some("\x1b[36m")
    } else if Variant::from_code(word).is_some() {
        Some("\x1b[33m")
    } else if word.parse::<i64>().is_ok() {
        Some("\x1b[34m")
    } else {
        None
    }
}

/// Completes the word under the cursor from a fixed word list.
struct WordCompleter {
    words: Vec<String>,
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];

        let candidates = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<MenagerieHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline editor with protocol-word completion and
    /// history hints.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let internal = |e: ReadlineError| Error::new(ErrorKind::Internal(e.to_string()));
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(internal)?
            .build();

        let helper = MenagerieHelper {
            completer: WordCompleter {
                words: protocol_words(),
            },
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(internal)?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
