//! Periodic traffic reporter
//!
//! Wakes once per print delay, drains the period counters and prints
//! `<timestamp>: <N> Requests, <M> Bytes` when anything was recorded.
//! Quiet periods print nothing.

use crate::console::{self, Console};
use crate::metrics::{PeriodTotals, TrafficCounters};
use crate::types::PrintDelay;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Background task draining the period counters on a fixed interval
#[derive(Debug, Clone)]
pub struct PeriodicReporter {
    counters: TrafficCounters,
    console: Console,
    period: Duration,
}

impl PeriodicReporter {
    #[must_use]
    pub fn new(counters: TrafficCounters, console: Console, delay: PrintDelay) -> Self {
        Self {
            counters,
            console,
            period: delay.as_duration(),
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Drain the period counters and print a summary if they were non-zero
    ///
    /// Returns the drained totals when a line was printed.
    pub fn report_once(&self) -> Option<PeriodTotals> {
        let drained = self.counters.drain_period();
        if drained.is_empty() {
            return None;
        }
        self.console
            .write_line(&format!("{}: {}", console::timestamp(), drained));
        Some(drained)
    }

    /// Spawn the reporting loop; it stops when `shutdown` is cancelled
    pub fn spawn(self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }

    async fn run(self, shutdown: CancellationToken) {
        // First drain happens one full period after start
        let first_tick = tokio::time::Instant::now() + self.period;
        let mut interval = tokio::time::interval_at(first_tick, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        debug!("Periodic reporter started (every {:?})", self.period);
        loop {
            tokio::select! {
                () = shutdown.cancelled() => break,
                _ = interval.tick() => {
                    self.report_once();
                }
            }
        }
        debug!("Periodic reporter stopped");
    }
}
