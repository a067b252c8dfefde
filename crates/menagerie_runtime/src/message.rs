//! Protocol output messages and where they go.

use std::fmt;
use std::io::{self, Write};

use menagerie_foundation::{Animal, Days, Error, Result, Variant};

/// One line of protocol output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// An animal introducing itself.
    Talk {
        /// Its name.
        name: String,
        /// Its age.
        days_lived: Days,
    },
    /// Announces the attacker before the defender is hit.
    Attacking {
        /// The attacker's variant.
        variant: Variant,
    },
    /// An animal died during a period.
    Died {
        /// Its name.
        name: String,
    },
    /// A position was out of range.
    NotFound,
    /// APPLY_SUBSTANCE in Freedom.
    CannotApplyInFreedom,
    /// REMOVE_SUBSTANCE in Freedom.
    CannotRemoveInFreedom,
    /// ATTACK in Freedom.
    CannotAttackInFreedom,
    /// REMOVE_SUBSTANCE on something that has no base form.
    InvalidRemoval,
}

impl Message {
    /// The introduction `animal` gives.
    #[must_use]
    pub fn talk(animal: &Animal) -> Self {
        Self::Talk {
            name: animal.name().to_string(),
            days_lived: animal.days_lived(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Talk { name, days_lived } => {
                write!(f, "My name is {name}, days lived: {days_lived}")
            }
            Self::Attacking { variant } => write!(f, "{variant} is attacking"),
            Self::Died { name } => write!(f, "{name} has died of old days"),
            Self::NotFound => f.write_str("Animal not found"),
            Self::CannotApplyInFreedom => f.write_str("Substance cannot be applied in freedom"),
            Self::CannotRemoveInFreedom => f.write_str("Substance cannot be removed in freedom"),
            Self::CannotAttackInFreedom => f.write_str("Animals cannot attack in Freedom"),
            Self::InvalidRemoval => f.write_str("Invalid substance removal"),
        }
    }
}

// =============================================================================
// Message Sink
// =============================================================================

/// Receives protocol messages in emission order.
pub trait MessageSink {
    /// Emits one message.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the message cannot be delivered.
    fn emit(&mut self, message: Message) -> Result<()>;
}

/// Collects messages, for tests and embedding.
impl MessageSink for Vec<Message> {
    fn emit(&mut self, message: Message) -> Result<()> {
        self.push(message);
        Ok(())
    }
}

/// Writes each message as a line to a writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flushes the writer.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::io(e.to_string()))
    }
}

impl WriterSink<io::Stdout> {
    /// A sink writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MessageSink for WriterSink<W> {
    fn emit(&mut self, message: Message) -> Result<()> {
        writeln!(self.writer, "{message}").map_err(|e| Error::io(e.to_string()))
    }
}
