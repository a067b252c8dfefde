//! Command line parsing.
//!
//! Every command is a whitespace-separated, fixed-arity, positional token
//! list. Container slots are written `<Kind> <Code>`, except Freedom,
//! which is written `Freedom` alone.
//!
//! Substance and attack commands naming Freedom are refused whatever
//! follows, so their positions are read leniently (a missing or
//! malformed position reads as 0). A removal naming anything but a
//! better container of Cage or Aquarium is refused before its position
//! is read.
//!
//! ```text
//! CREATE M Tom IN Cage 3
//! APPLY_SUBSTANCE Cage M 0
//! REMOVE_SUBSTANCE Aquarium BF 0
//! ATTACK Cage M 0 1
//! TALK Freedom 0
//! PERIOD
//! ```

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use menagerie_foundation::{ContainerKind, Days, Error, Position, Result, Variant};
use menagerie_storage::Slot;

/// Protocol verbs, in the order the REPL completes them.
pub const VERBS: [&str; 6] = [
    "CREATE",
    "APPLY_SUBSTANCE",
    "REMOVE_SUBSTANCE",
    "ATTACK",
    "TALK",
    "PERIOD",
];

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create an animal and place it.
    Create {
        /// What to create.
        variant: Variant,
        /// Its name.
        name: String,
        /// The container kind it should go in.
        kind: ContainerKind,
        /// Its starting age.
        days: Days,
    },
    /// Upgrade or fuse the animal at a position.
    ApplySubstance {
        /// Target container (not checked to exist).
        slot: Slot,
        /// Target position.
        position: Position,
    },
    /// Downgrade the animal at a position.
    RemoveSubstance {
        /// A better container, or Freedom.
        slot: Slot,
        /// Target position.
        position: Position,
    },
    /// A removal from a Cage or Aquarium container holding no better
    /// animals. Always refused.
    InvalidRemoval {
        /// The container kind named.
        kind: ContainerKind,
        /// The type code as written, possibly unknown or empty.
        code: String,
    },
    /// One animal attacks another in the same container.
    Attack {
        /// The shared container (not checked to exist).
        slot: Slot,
        /// Attacker position.
        attacker: Position,
        /// Defender position.
        defender: Position,
    },
    /// Print an animal's introduction.
    Talk {
        /// Target container (not checked to exist).
        slot: Slot,
        /// Target position.
        position: Position,
    },
    /// Age every container by one day.
    Period,
}

impl Command {
    /// Parses one input line.
    ///
    /// Blank lines and lines whose first token is not a verb yield
    /// `Ok(None)`; they are not errors.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` when a known verb has missing or malformed
    /// arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = Tokens {
            inner: line.split_whitespace(),
            line,
        };
        let Some(verb) = tokens.inner.next() else {
            return Ok(None);
        };

        let command = match verb {
            "CREATE" => {
                let variant = tokens.variant()?;
                if !variant.is_creatable() {
                    return Err(tokens.error(format!("{} cannot be created", variant.code())));
                }
                let name = tokens.take("name")?.to_string();
                tokens.take("IN")?;
                let kind = tokens.kind()?;
                let days = tokens.number("days")?;
                Self::Create {
                    variant,
                    name,
                    kind,
                    days,
                }
            }
            "APPLY_SUBSTANCE" => {
                let slot = tokens.slot()?;
                Self::ApplySubstance {
                    slot,
                    position: tokens.position(slot, "position")?,
                }
            }
            "REMOVE_SUBSTANCE" => tokens.removal()?,
            "ATTACK" => {
                let slot = tokens.slot()?;
                Self::Attack {
                    slot,
                    attacker: tokens.position(slot, "attacker position")?,
                    defender: tokens.position(slot, "defender position")?,
                }
            }
            "TALK" => Self::Talk {
                slot: tokens.slot()?,
                position: tokens.number("position")?,
            },
            "PERIOD" => Self::Period,
            _ => return Ok(None),
        };

        Ok(Some(command))
    }

    /// The protocol verb.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Create { .. } => "CREATE",
            Self::ApplySubstance { .. } => "APPLY_SUBSTANCE",
            Self::RemoveSubstance { .. } | Self::InvalidRemoval { .. } => "REMOVE_SUBSTANCE",
            Self::Attack { .. } => "ATTACK",
            Self::Talk { .. } => "TALK",
            Self::Period => "PERIOD",
        }
    }
}

/// Writes the command back in protocol form.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.verb();
        match self {
            Self::Create {
                variant,
                name,
                kind,
                days,
            } => write!(f, "{verb} {} {name} IN {kind} {days}", variant.code()),
            Self::ApplySubstance { slot, position }
            | Self::RemoveSubstance { slot, position }
            | Self::Talk { slot, position } => {
                write!(f, "{verb} {} {position}", SlotTokens(*slot))
            }
            Self::Attack {
                slot,
                attacker,
                defender,
            } => write!(f, "{verb} {} {attacker} {defender}", SlotTokens(*slot)),
            Self::InvalidRemoval { kind, code } if code.is_empty() => write!(f, "{verb} {kind}"),
            Self::InvalidRemoval { kind, code } => write!(f, "{verb} {kind} {code}"),
            Self::Period => f.write_str(verb),
        }
    }
}

/// Renders a slot the way commands spell it (`Cage M`, `Freedom`).
struct SlotTokens(Slot);

impl fmt::Display for SlotTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.variant() {
            Some(variant) => write!(f, "{} {}", self.0.kind(), variant.code()),
            None => write!(f, "{}", self.0.kind()),
        }
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    line: &'a str,
}

impl<'a> Tokens<'a> {
    fn error(&self, message: impl Into<String>) -> Error {
        Error::parse(message, self.line)
    }

    fn take(&mut self, what: &str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| Error::parse(format!("missing {what}"), self.line))
    }

    fn variant(&mut self) -> Result<Variant> {
        let code = self.take("type code")?;
        Variant::from_code(code).ok_or_else(|| self.error(format!("unknown type code {code}")))
    }

    fn kind(&mut self) -> Result<ContainerKind> {
        let name = self.take("container")?;
        ContainerKind::from_name(name).ok_or_else(|| self.error(format!("unknown container {name}")))
    }

    fn slot(&mut self) -> Result<Slot> {
        match self.kind()? {
            ContainerKind::Freedom => Ok(Slot::FREEDOM),
            kind => {
                let variant = self.variant()?;
                if variant.is_creatable() {
                    Ok(Slot::enclosure(kind, variant))
                } else {
                    Err(self.error(format!("{kind} never holds {variant}")))
                }
            }
        }
    }

    /// Reads the rest of a REMOVE_SUBSTANCE line.
    fn removal(&mut self) -> Result<Command> {
        let kind = self.kind()?;
        if kind == ContainerKind::Freedom {
            return Ok(Command::RemoveSubstance {
                slot: Slot::FREEDOM,
                position: self.lenient(),
            });
        }

        let code = self.inner.next().unwrap_or_default();
        match Variant::from_code(code).map(|variant| Slot::enclosure(kind, variant)) {
            Some(slot) if slot.is_valid() && slot.downgraded().is_some() => {
                Ok(Command::RemoveSubstance {
                    slot,
                    position: self.number("position")?,
                })
            }
            _ => Ok(Command::InvalidRemoval {
                kind,
                code: code.to_string(),
            }),
        }
    }

    /// A position in `slot`; lenient for Freedom.
    fn position(&mut self, slot: Slot, what: &str) -> Result<Position> {
        if slot.kind() == ContainerKind::Freedom {
            Ok(self.lenient())
        } else {
            self.number(what)
        }
    }

    fn lenient<T: FromStr + Default>(&mut self) -> T {
        self.inner
            .next()
            .and_then(|token| token.parse().ok())
            .unwrap_or_default()
    }

    fn number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self.take(what)?;
        token
            .parse()
            .map_err(|_| self.error(format!("invalid {what} {token}")))
    }
}
