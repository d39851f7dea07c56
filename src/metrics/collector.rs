//! Lock-free traffic counters

use super::{PeriodTotals, TotalsSnapshot};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Thread-safe request/byte counters shared by every request handler
///
/// Cloning is cheap: all clones point at the same cells. Cumulative totals
/// are never reset; the period cells are swapped back to zero by
/// [`drain_period`](Self::drain_period).
#[derive(Debug, Clone)]
pub struct TrafficCounters {
    inner: Arc<CountersInner>,
}

#[derive(Debug)]
struct CountersInner {
    total_requests: AtomicU64,
    total_bytes: AtomicU64,
    period_requests: AtomicU64,
    period_bytes: AtomicU64,
    start_time: Instant,
}

impl TrafficCounters {
    /// Create zeroed counters with `start_time` set to now
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CountersInner {
                total_requests: AtomicU64::new(0),
                total_bytes: AtomicU64::new(0),
                period_requests: AtomicU64::new(0),
                period_bytes: AtomicU64::new(0),
                start_time: Instant::now(),
            }),
        }
    }

    /// Account one request carrying `bytes` of body
    ///
    /// Totals are bumped before the period cells (and the period cells use
    /// `Release`), so anyone who observes a period increment with `Acquire`
    /// also observes the matching total: `period <= total` always holds.
    #[inline]
    pub fn record(&self, bytes: u64) {
        let inner = &self.inner;
        inner.total_requests.fetch_add(1, Ordering::Relaxed);
        inner.total_bytes.fetch_add(bytes, Ordering::Relaxed);
        inner.period_requests.fetch_add(1, Ordering::Release);
        inner.period_bytes.fetch_add(bytes, Ordering::Release);
    }

    /// Read and reset the period counters
    ///
    /// Each cell is swapped with zero in a single atomic step, so a concurrent
    /// `record` lands either in the returned value or in the next period.
    #[inline]
    pub fn drain_period(&self) -> PeriodTotals {
        PeriodTotals {
            requests: self.inner.period_requests.swap(0, Ordering::AcqRel),
            bytes: self.inner.period_bytes.swap(0, Ordering::AcqRel),
        }
    }

    /// Current period counters without resetting them
    #[must_use]
    #[inline]
    pub fn period_totals(&self) -> PeriodTotals {
        PeriodTotals {
            requests: self.inner.period_requests.load(Ordering::Acquire),
            bytes: self.inner.period_bytes.load(Ordering::Acquire),
        }
    }

    /// Weakly consistent read of the cumulative counters plus uptime
    #[must_use]
    pub fn snapshot_totals(&self) -> TotalsSnapshot {
        TotalsSnapshot {
            total_requests: self.inner.total_requests.load(Ordering::Relaxed),
            total_bytes: self.inner.total_bytes.load(Ordering::Relaxed),
            uptime: self.inner.start_time.elapsed(),
        }
    }

    /// Instant the counters were created
    #[must_use]
    #[inline]
    pub fn start_time(&self) -> Instant {
        self.inner.start_time
    }
}

impl Default for TrafficCounters {
    fn default() -> Self {
        Self::new()
    }
}
