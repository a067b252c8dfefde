//! The interactive REPL.
//!
//! Every non-blank line is one command; there is no count line. Ctrl+C
//! discards the current line and Ctrl+D ends the session.

use menagerie_foundation::Result;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::message::MessageSink;
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Interpreter state.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "menagerie> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the REPL, returning its session.
    #[must_use]
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Runs until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal or the sink fails.
    pub fn run(&mut self, sink: &mut dyn MessageSink) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        while self.step(sink)? {}
        Ok(())
    }

    /// Reads and executes one line. Returns `Ok(false)` at end of input.
    fn step(&mut self, sink: &mut dyn MessageSink) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&line);
        self.session.execute_line(&line, sink)?;
        Ok(true)
    }
}

fn print_banner() {
    println!("\x1b[1mMenagerie\x1b[0m {}", env!("CARGO_PKG_VERSION"));
    println!("One command per line. Tab completes, Ctrl+D exits.\n");
}
