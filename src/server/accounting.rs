//! Per-request accounting
//!
//! Every request is recorded in the traffic counters. In `log` mode the
//! request is also dumped to the console as one block:
//!
//! ```text
//! ------> 2024-01-31 13:45:00 POST /path?x=1
//! content-type: text/plain
//! --------------------
//! <body>
//! --------------------
//! ```

use super::ServerState;
use crate::console;
use crate::constants::console::{BODY_SEPARATOR, REQUEST_MARKER};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Method, Uri};
use std::fmt::Write as _;

impl ServerState {
    /// Account one request; never fails
    pub fn account(&self, parts: &Parts, body: &[u8]) {
        self.counters.record(body.len() as u64);

        if self.mode.logs_requests() {
            let block = format_request_block(
                &console::timestamp(),
                &parts.method,
                &parts.uri,
                &parts.headers,
                body,
            );
            self.console.write_block(&block);
        }
    }
}

/// Render the console block for one logged request
///
/// Multi-valued headers produce one line per value. Non-UTF-8 header values
/// and bodies are decoded lossily.
#[must_use]
pub fn format_request_block(
    timestamp: &str,
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: &[u8],
) -> String {
    let mut block = String::with_capacity(128 + body.len());

    // Writing into a String cannot fail
    let _ = writeln!(block, "{} {} {} {}", REQUEST_MARKER, timestamp, method, uri);
    for (name, value) in headers {
        let _ = writeln!(
            block,
            "{}: {}",
            name,
            String::from_utf8_lossy(value.as_bytes())
        );
    }
    block.push_str(BODY_SEPARATOR);
    block.push('\n');
    block.push_str(&String::from_utf8_lossy(body));
    block.push('\n');
    block.push_str(BODY_SEPARATOR);
    block.push('\n');
    block
}
