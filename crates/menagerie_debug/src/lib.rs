//! Tracing for Menagerie.
//!
//! This crate provides:
//! - [`Tracer`] - Records simulation events with zero overhead when disabled
//! - [`TraceBuffer`] - Bounded ring of recent records
//! - [`HumanFormatter`] - One-line rendering of records
//!
//! Trace output goes to stderr only; stdout belongs to the protocol.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter, TraceOutput,
    TraceRecord, Tracer, TracerConfig,
};
