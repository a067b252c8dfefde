//! Ring buffer for trace records.

use std::collections::{HashMap, VecDeque};

use super::record::{TraceEvent, TraceRecord};

/// Default number of records a buffer holds.
pub const DEFAULT_BUFFER_SIZE: usize = 10_000;

// =============================================================================
// Trace Buffer
// =============================================================================

/// A bounded buffer of the most recent trace records.
///
/// When full, the oldest record is dropped for each new one. Record ids
/// keep increasing across evictions and [`TraceBuffer::clear`].
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    /// The records, oldest first.
    records: VecDeque<TraceRecord>,
    /// Maximum number of records to keep.
    max_size: usize,
    /// Next record id to assign.
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a buffer holding at most `max_size` records (at least one).
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Pushes an event, returning the assigned record id.
    pub fn push(&mut self, day: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        while self.records.len() >= self.max_size {
            self.records.pop_front();
        }
        self.records
            .push_back(TraceRecord::new(id, day, timestamp_ns, event));
        id
    }

    /// The most recently pushed record still held.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the buffer holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Records made while the world was at `day`.
    #[must_use]
    pub fn records_for_day(&self, day: u64) -> Vec<&TraceRecord> {
        self.filter(|r| r.day == day)
    }

    /// The newest `count` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Records of one event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Summary counts.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut event_counts = HashMap::new();
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
        }

        TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            oldest_day: self.records.front().map(|r| r.day),
            newest_day: self.records.back().map(|r| r.day),
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

// =============================================================================
// Buffer Statistics
// =============================================================================

/// Statistics about a trace buffer.
#[derive(Clone, Debug)]
pub struct TraceBufferStats {
    /// Records currently held.
    pub record_count: usize,
    /// Capacity.
    pub max_size: usize,
    /// Day of the oldest record.
    pub oldest_day: Option<u64>,
    /// Day of the newest record.
    pub newest_day: Option<u64>,
    /// Count per event type.
    pub event_counts: HashMap<&'static str, usize>,
}
