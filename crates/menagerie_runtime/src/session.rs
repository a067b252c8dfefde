//! Interpreter session: the world, the tracer, and command dispatch.
//!
//! Every command runs to completion against the session's [`World`].
//! Recoverable errors become protocol messages (or silence) here; only
//! fatal errors (`Io`, `Internal`) reach the caller.

use menagerie_debug::{TraceEvent, Tracer};
use menagerie_engine::{Combat, apply_substance, attack, remove_substance, run_period};
use menagerie_foundation::{
    Animal, ContainerKind, Days, Error, ErrorKind, Operation, Position, Result, Variant,
};
use menagerie_storage::{Slot, World};

use crate::command::Command;
use crate::message::{Message, MessageSink};

/// Interpreter state for one run.
#[derive(Debug, Default)]
pub struct Session {
    /// The simulation state.
    world: World,
    /// Tracer for observability.
    tracer: Tracer,
}

impl Session {
    /// Creates a session with an empty world and tracing off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an existing world.
    #[must_use]
    pub fn with_world(world: World) -> Self {
        let mut tracer = Tracer::disabled();
        tracer.set_day(world.day());
        Self { world, tracer }
    }

    /// Replaces the tracer.
    #[must_use]
    pub fn with_tracer(mut self, mut tracer: Tracer) -> Self {
        tracer.set_day(self.world.day());
        self.tracer = tracer;
        self
    }

    /// The current world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The current world, mutably.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The tracer.
    #[must_use]
    pub const fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// The tracer, mutably.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Parses and executes one input line.
    ///
    /// Blank lines, unknown verbs and malformed arguments are dropped
    /// without output.
    ///
    /// # Errors
    ///
    /// Returns only fatal errors, such as a failing sink.
    pub fn execute_line(&mut self, line: &str, sink: &mut dyn MessageSink) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        self.tracer.command_start(line);
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(&command, sink),
            Ok(None) => {
                self.tracer.command_ignored(line, "not a command");
                Ok(())
            }
            Err(error) => {
                self.tracer.command_ignored(line, &error);
                Ok(())
            }
        }
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns only fatal errors, such as a failing sink.
    pub fn execute(&mut self, command: &Command, sink: &mut dyn MessageSink) -> Result<()> {
        let outcome = match command {
            Command::Create {
                variant,
                name,
                kind,
                days,
            } => self.create(*variant, name, *kind, *days, sink),
            Command::ApplySubstance { slot, position } => {
                apply_substance(&mut self.world, *slot, *position)
                    .map(|transition| self.tracer.transition(&transition))
            }
            Command::RemoveSubstance { slot, position } => {
                remove_substance(&mut self.world, *slot, *position)
                    .map(|transition| self.tracer.transition(&transition))
            }
            Command::InvalidRemoval { .. } => sink.emit(Message::InvalidRemoval),
            Command::Attack {
                slot,
                attacker,
                defender,
            } => self.attack(*slot, *attacker, *defender, sink),
            Command::Talk { slot, position } => self.talk(*slot, *position, sink),
            Command::Period => self.period(sink),
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(error) => self.recover(command, error, sink),
        }
    }

    /// Turns a recoverable error into its message, or into silence.
    fn recover(&mut self, command: &Command, error: Error, sink: &mut dyn MessageSink) -> Result<()> {
        if error.is_fatal() {
            return Err(error);
        }

        let message = match &error.kind {
            ErrorKind::IndexOutOfBounds { .. } => Some(Message::NotFound),
            ErrorKind::PolicyViolation { operation, .. } => Some(match operation {
                Operation::ApplySubstance => Message::CannotApplyInFreedom,
                Operation::RemoveSubstance => Message::CannotRemoveInFreedom,
                Operation::Attack => Message::CannotAttackInFreedom,
            }),
            ErrorKind::InvalidTransition {
                operation: Operation::RemoveSubstance,
                ..
            } => Some(Message::InvalidRemoval),
            _ => None,
        };

        match message {
            Some(message) => sink.emit(message),
            None => {
                self.tracer.command_ignored(&command.to_string(), &error);
                Ok(())
            }
        }
    }

    fn create(
        &mut self,
        variant: Variant,
        name: &str,
        kind: ContainerKind,
        days: Days,
        sink: &mut dyn MessageSink,
    ) -> Result<()> {
        let slot = match Slot::for_animal(kind, variant) {
            Ok(slot) => slot,
            Err(error) if matches!(error.kind, ErrorKind::TypeMismatch { .. }) => {
                self.tracer.record(TraceEvent::Rejected {
                    name: name.to_string(),
                    variant,
                    kind,
                });
                return Ok(());
            }
            Err(error) => return Err(error),
        };

        let animal = Animal::new(variant, name, days);
        let message = Message::talk(&animal);
        self.world.insert(slot, animal)?;
        if self.tracer.is_enabled() {
            self.tracer.record(TraceEvent::Created {
                name: name.to_string(),
                variant,
                slot,
            });
        }
        sink.emit(message)
    }

    fn attack(
        &mut self,
        slot: Slot,
        attacker: Position,
        defender: Position,
        sink: &mut dyn MessageSink,
    ) -> Result<()> {
        let combat = attack(&mut self.world, slot, attacker, defender)?;
        match &combat {
            Combat::Ignored => self.tracer.command_ignored(
                &Command::Attack {
                    slot,
                    attacker,
                    defender,
                }
                .to_string(),
                "self-attack",
            ),
            Combat::Defeated { attacker, defender } => {
                self.tracer.attacked(*attacker, defender.name(), slot);
            }
        }

        match combat.attacker() {
            Some(variant) => sink.emit(Message::Attacking { variant }),
            None => Ok(()),
        }
    }

    fn talk(&self, slot: Slot, position: Position, sink: &mut dyn MessageSink) -> Result<()> {
        let animal = self.world.container(slot)?.get(position)?;
        sink.emit(Message::talk(animal))
    }

    fn period(&mut self, sink: &mut dyn MessageSink) -> Result<()> {
        self.tracer.period_start(self.world.day() + 1);
        let report = run_period(&mut self.world)?;

        for death in &report.deaths {
            self.tracer.died(death);
            sink.emit(Message::Died {
                name: death.name.clone(),
            })?;
        }

        self.tracer.period_end(report.day, report.deaths.len());
        Ok(())
    }
}
