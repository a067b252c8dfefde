//! Trace output formatting.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Renders trace records as text.
pub trait TraceFormatter {
    /// Formats a single record.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats several records, one per line.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats records as single human-readable lines.
///
/// ```text
/// T0003 [000012] DIED Tom in Freedom
/// ```
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record ids.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a formatter showing only the day and the event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record ids.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn describe(event: &TraceEvent) -> String {
        match event {
            TraceEvent::CommandStart { line } => format!("> {line}"),
            TraceEvent::CommandIgnored { line, reason } => {
                format!("IGNORED {line:?}: {reason}")
            }
            TraceEvent::Created {
                name,
                variant,
                slot,
            } => format!("CREATED {name} ({variant}) in {slot}"),
            TraceEvent::Rejected {
                name,
                variant,
                kind,
            } => format!("REJECTED {name} ({variant}) by {kind}"),
            TraceEvent::Upgraded {
                name,
                from,
                to,
                days_lived,
            } => format!("UPGRADED {name} {from} -> {to}, days lived: {days_lived}"),
            TraceEvent::Fused {
                name,
                from,
                drained,
            } => format!("FUSED {name} from {from}, drained {drained}"),
            TraceEvent::Downgraded {
                name,
                from,
                to,
                days_lived,
            } => format!("DOWNGRADED {name} {from} -> {to}, days lived: {days_lived}"),
            TraceEvent::Attacked {
                attacker,
                defeated,
                slot,
            } => format!("ATTACK {attacker} in {slot} defeated {defeated}"),
            TraceEvent::Died { name, slot, .. } => format!("DIED {name} in {slot}"),
            TraceEvent::PeriodStart { day } => format!("=== PERIOD {day} START ==="),
            TraceEvent::PeriodEnd { day, deaths } => {
                format!("=== PERIOD {day} END ({deaths} died) ===")
            }
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut line = format!("T{:04} ", record.day);

        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }

        if self.show_timestamps {
            let _ = write!(
                line,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        line.push_str(&Self::describe(&record.event));
        line
    }
}
