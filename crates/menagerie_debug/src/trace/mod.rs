//! Tracing of command execution.
//!
//! A [`Tracer`] records [`TraceEvent`]s into a bounded [`TraceBuffer`] and
//! optionally echoes each one to stderr. When disabled, recording returns
//! immediately.

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{DEFAULT_BUFFER_SIZE, TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use menagerie_engine::{Death, Transition};
use menagerie_foundation::Variant;
use menagerie_storage::Slot;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (records are still buffered).
    #[default]
    None,
    /// Write each record to stderr as it is made.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in the buffer.
    pub buffer_size: usize,
    /// Where to echo records.
    pub output: TraceOutput,
    /// Event types to keep (empty keeps all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            output: TraceOutput::None,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a disabled configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set the buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to echo records to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to keep only the given event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records simulation events.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_day: u64,
    start_time: Instant,
    formatter: HumanFormatter,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Tracer {
    /// Creates a tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_day: 0,
            start_time: Instant::now(),
            formatter: HumanFormatter::new().with_ids(),
        }
    }

    /// Creates a disabled tracer.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that echoes to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Sets the day stamped on new records.
    pub fn set_day(&mut self, day: u64) {
        self.current_day = day;
    }

    /// The day stamped on new records.
    #[must_use]
    pub fn current_day(&self) -> u64 {
        self.current_day
    }

    /// Sets the echo destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Records an event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_day, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let _ = writeln!(io::stderr(), "{}", self.formatter.format(record));
            }
        }
    }

    /// Formats a record the way stderr output does.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        self.formatter.format(record)
    }

    /// The record buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records the start of a command line.
    #[inline]
    pub fn command_start(&mut self, line: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::CommandStart {
                line: line.to_string(),
            });
        }
    }

    /// Records a command line that was dropped without output.
    #[inline]
    pub fn command_ignored(&mut self, line: &str, reason: impl ToString) {
        if self.is_enabled() {
            self.record(TraceEvent::CommandIgnored {
                line: line.to_string(),
                reason: reason.to_string(),
            });
        }
    }

    /// Records a completed lineage step.
    #[inline]
    pub fn transition(&mut self, transition: &Transition) {
        if self.is_enabled() {
            self.record(TraceEvent::from_transition(transition));
        }
    }

    /// Records the start of a period, moving the tracer to `day`.
    #[inline]
    pub fn period_start(&mut self, day: u64) {
        self.current_day = day;
        self.record(TraceEvent::PeriodStart { day });
    }

    /// Records one death.
    #[inline]
    pub fn died(&mut self, death: &Death) {
        if self.is_enabled() {
            self.record(TraceEvent::Died {
                name: death.name.clone(),
                slot: death.slot,
                days_lived: death.days_lived,
            });
        }
    }

    /// Records the end of a period.
    #[inline]
    pub fn period_end(&mut self, day: u64, deaths: usize) {
        self.record(TraceEvent::PeriodEnd { day, deaths });
    }

    /// Records an attack.
    #[inline]
    pub fn attacked(&mut self, attacker: Variant, defeated: &str, slot: Slot) {
        if self.is_enabled() {
            self.record(TraceEvent::Attacked {
                attacker,
                defeated: defeated.to_string(),
                slot,
            });
        }
    }
}
