//! Benchmarks for the request hot path
//!
//! Measures:
//! - TrafficCounters::record (single thread and contended)
//! - drain_period and snapshot reads
//! - `/stat` rendering
//! - log mode block formatting
//!
//! Run with: cargo bench --bench counters

use axum::http::{HeaderMap, HeaderValue, Method, Uri};
use divan::{Bencher, black_box};
use scale_echo::metrics::{TotalsSnapshot, TrafficCounters, TrafficStats};
use scale_echo::server::{format_request_block, render_html, render_json};
use std::time::Duration;

fn main() {
    divan::main();
}

// =============================================================================
// Counters
// =============================================================================

mod counters {
    use super::*;

    #[divan::bench(sample_count = 1000, sample_size = 1000)]
    fn record(bencher: Bencher) {
        let counters = TrafficCounters::new();
        bencher.bench(|| counters.record(black_box(512)));
    }

    #[divan::bench(threads = [1, 2, 4, 8])]
    fn record_contended(bencher: Bencher) {
        let counters = TrafficCounters::new();
        bencher.bench(|| counters.record(black_box(512)));
    }

    #[divan::bench(sample_count = 1000, sample_size = 1000)]
    fn drain_period(bencher: Bencher) {
        let counters = TrafficCounters::new();
        bencher.bench(|| {
            counters.record(64);
            black_box(counters.drain_period())
        });
    }

    #[divan::bench]
    fn snapshot_totals(bencher: Bencher) {
        let counters = TrafficCounters::new();
        counters.record(1024);
        bencher.bench(|| black_box(counters.snapshot_totals()));
    }
}

// =============================================================================
// Rendering
// =============================================================================

mod rendering {
    use super::*;

    fn stats() -> TrafficStats {
        TrafficStats::from_totals(&TotalsSnapshot {
            total_requests: 1_234_567,
            total_bytes: 9_876_543_210,
            uptime: Duration::from_secs(3600),
        })
    }

    #[divan::bench]
    fn stats_json(bencher: Bencher) {
        let stats = stats();
        bencher.bench(|| black_box(render_json(black_box(&stats))));
    }

    #[divan::bench]
    fn stats_html(bencher: Bencher) {
        let stats = stats();
        bencher.bench(|| black_box(render_html(black_box(&stats))));
    }

    #[divan::bench(args = [0, 256, 4096])]
    fn request_block(bencher: Bencher, body_len: usize) {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("user-agent", HeaderValue::from_static("load-generator/1.0"));
        let uri: Uri = "/api/v1/echo?run=42".parse().unwrap();
        let body = vec![b'x'; body_len];

        bencher.bench(|| {
            black_box(format_request_block(
                "2024-01-31 13:45:00",
                &Method::POST,
                &uri,
                &headers,
                black_box(&body),
            ))
        });
    }
}
