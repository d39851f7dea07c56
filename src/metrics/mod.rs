//! Traffic accounting for the echo server
//!
//! This module provides lock-free, thread-safe counters using atomic operations.
//! Counters are updated from every request handler with no lock on the hot path;
//! the periodic reporter drains the period cells and `/stat` reads the totals.

mod collector;
mod snapshot;

pub use collector::TrafficCounters;
pub use snapshot::{PeriodTotals, TotalsSnapshot, TrafficStats};
