//! Constants used throughout the echo server
//!
//! This module centralizes magic numbers, paths and output formats
//! to improve maintainability and reduce duplication.

/// Statistics computation constants
pub mod stats {
    /// Lower bound for uptime in seconds, avoids division by zero right after start
    pub const MIN_UPTIME_SECS: f64 = 1e-9;
}

/// HTTP route paths
pub mod routes {
    /// Statistics snapshot endpoint
    pub const STAT: &str = "/stat";

    /// Scale-test claim token endpoint
    pub const CLAIM_TOKEN: &str = "/.well-known/scale-test-claim-token.txt";

    /// Query parameter value selecting the HTML stats view (`?format=html`)
    pub const FORMAT_HTML: &str = "html";
}

/// Content types for rendered responses
pub mod content_type {
    pub const JSON: &str = "application/json; charset=utf-8";
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const TEXT: &str = "text/plain; charset=utf-8";
}

/// Console output formats
pub mod console {
    /// Timestamp format for summary lines and request blocks (`2024-01-31 13:45:00`)
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Prefix of the first line of a logged request block
    pub const REQUEST_MARKER: &str = "------>";

    /// Separator around the logged request body
    pub const BODY_SEPARATOR: &str = "--------------------";
}

/// Lifecycle constants
pub mod shutdown {
    /// Default time allowed for in-flight requests once shutdown starts (seconds)
    pub const DEFAULT_GRACE_SECS: u64 = 30;
}

/// Configuration defaults
pub mod defaults {
    /// Bind on all interfaces
    pub const HOST: &str = "0.0.0.0";

    /// Default operating mode
    pub const MODE: &str = "count";
}
