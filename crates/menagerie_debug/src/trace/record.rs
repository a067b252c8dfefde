//! Trace event and record types.

use menagerie_engine::{Transition, TransitionKind};
use menagerie_foundation::{ContainerKind, Days, Variant};
use menagerie_storage::Slot;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced while commands run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A command line is about to run.
    CommandStart {
        /// The raw line.
        line: String,
    },

    /// A command line was dropped without output.
    CommandIgnored {
        /// The raw line.
        line: String,
        /// Why it was dropped.
        reason: String,
    },

    /// An animal was created and placed.
    Created {
        /// Its name.
        name: String,
        /// Its variant.
        variant: Variant,
        /// Where it went.
        slot: Slot,
    },

    /// A CREATE named a container kind that refuses the variant.
    Rejected {
        /// The would-be animal's name.
        name: String,
        /// The refused variant.
        variant: Variant,
        /// The refusing kind.
        kind: ContainerKind,
    },

    /// A base animal was upgraded.
    Upgraded {
        /// Its name.
        name: String,
        /// Container it left.
        from: Slot,
        /// Container it entered.
        to: Slot,
        /// Its new age.
        days_lived: Days,
    },

    /// A better animal was fused into a Monster.
    Fused {
        /// Its name.
        name: String,
        /// The better container it left, now empty.
        from: Slot,
        /// How many bystanders the drain wiped out.
        drained: usize,
    },

    /// A better animal was downgraded.
    Downgraded {
        /// Its name.
        name: String,
        /// Container it left.
        from: Slot,
        /// Container it entered.
        to: Slot,
        /// Its new age.
        days_lived: Days,
    },

    /// One animal attacked another.
    Attacked {
        /// The attacker's variant.
        attacker: Variant,
        /// The removed defender's name.
        defeated: String,
        /// Where the fight happened.
        slot: Slot,
    },

    /// An animal died of old age.
    Died {
        /// Its name.
        name: String,
        /// Where it died.
        slot: Slot,
        /// Its age at death.
        days_lived: Days,
    },

    /// A period has started.
    PeriodStart {
        /// The day the period leads to.
        day: u64,
    },

    /// A period has ended.
    PeriodEnd {
        /// The day reached.
        day: u64,
        /// How many animals died.
        deaths: usize,
    },
}

impl TraceEvent {
    /// Short kebab-case tag used for filtering.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CommandStart { .. } => "command-start",
            Self::CommandIgnored { .. } => "command-ignored",
            Self::Created { .. } => "created",
            Self::Rejected { .. } => "rejected",
            Self::Upgraded { .. } => "upgraded",
            Self::Fused { .. } => "fused",
            Self::Downgraded { .. } => "downgraded",
            Self::Attacked { .. } => "attacked",
            Self::Died { .. } => "died",
            Self::PeriodStart { .. } => "period-start",
            Self::PeriodEnd { .. } => "period-end",
        }
    }

    /// Builds the event describing a completed lineage step.
    #[must_use]
    pub fn from_transition(transition: &Transition) -> Self {
        let name = transition.name.clone();
        match transition.kind {
            TransitionKind::Upgrade => Self::Upgraded {
                name,
                from: transition.from,
                to: transition.to,
                days_lived: transition.days_lived,
            },
            TransitionKind::Fuse => Self::Fused {
                name,
                from: transition.from,
                drained: transition.drained.len(),
            },
            TransitionKind::Downgrade => Self::Downgraded {
                name,
                from: transition.from,
                to: transition.to,
                days_lived: transition.days_lived,
            },
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A recorded event with its bookkeeping.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Monotonic record id.
    pub id: u64,
    /// World day when the event was recorded.
    pub day: u64,
    /// Nanoseconds since the tracer started.
    pub timestamp_ns: u64,
    /// The event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(id: u64, day: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            day,
            timestamp_ns,
            event,
        }
    }

    /// Shortcut for the event's type tag.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
