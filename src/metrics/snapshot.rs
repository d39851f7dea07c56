//! Snapshot types and derived traffic statistics
//!
//! `TotalsSnapshot` is the raw read of the cumulative counters. `TrafficStats`
//! derives the rates served by `/stat`; it is recomputed on every query.

use crate::constants::stats::MIN_UPTIME_SECS;
use crate::formatting::format_duration;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Period counters returned by a drain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodTotals {
    pub requests: u64,
    pub bytes: u64,
}

impl PeriodTotals {
    /// True when nothing was recorded during the period
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.requests == 0 && self.bytes == 0
    }
}

impl fmt::Display for PeriodTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Requests, {} Bytes", self.requests, self.bytes)
    }
}

/// Cumulative counters read at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TotalsSnapshot {
    pub total_requests: u64,
    pub total_bytes: u64,
    pub uptime: Duration,
}

impl TotalsSnapshot {
    /// Format uptime as a human-readable string
    #[must_use]
    pub fn format_uptime(&self) -> String {
        format_duration(self.uptime)
    }
}

/// Derived statistics served by the `/stat` endpoint
///
/// Field names are the JSON keys of the structured rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrafficStats {
    pub total_requests: u64,
    pub uptime_seconds: f64,
    #[serde(rename = "average_requests_per_sec")]
    pub avg_requests_per_sec: f64,
    pub total_bytes: u64,
    #[serde(rename = "average_bytes_per_sec")]
    pub avg_bytes_per_sec: f64,
    #[serde(rename = "average_bytes_per_request")]
    pub avg_bytes_per_request: f64,
}

impl TrafficStats {
    /// Compute rates from a totals snapshot
    ///
    /// Uptime is floored at [`MIN_UPTIME_SECS`] and the per-request average is
    /// 0 when no request has been seen, so this never divides by zero.
    #[must_use]
    pub fn from_totals(totals: &TotalsSnapshot) -> Self {
        let uptime_seconds = totals.uptime.as_secs_f64().max(MIN_UPTIME_SECS);
        let requests = totals.total_requests as f64;
        let bytes = totals.total_bytes as f64;

        let avg_bytes_per_request = if totals.total_requests > 0 {
            bytes / requests
        } else {
            0.0
        };

        Self {
            total_requests: totals.total_requests,
            uptime_seconds,
            avg_requests_per_sec: requests / uptime_seconds,
            total_bytes: totals.total_bytes,
            avg_bytes_per_sec: bytes / uptime_seconds,
            avg_bytes_per_request,
        }
    }
}
