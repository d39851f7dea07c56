//! Configuration type definitions
//!
//! This module contains the immutable configuration record consumed at startup.

use crate::types::{ClaimToken, HostName, Port, PrintDelay, ThreadCount};
use std::str::FromStr;
use std::time::Duration;

use super::ConfigError;

/// Operating mode of the echo server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Aggregate silently and print a summary line every print delay
    #[default]
    Count,
    /// Dump every request (line, headers, body) to the console
    Log,
}

impl Mode {
    /// Whether the periodic reporter runs in this mode
    #[must_use]
    pub const fn runs_reporter(&self) -> bool {
        matches!(self, Self::Count)
    }

    /// Whether each request is written to the console in this mode
    #[must_use]
    pub const fn logs_requests(&self) -> bool {
        matches!(self, Self::Log)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Log => "log",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" => Ok(Self::Count),
            "log" => Ok(Self::Log),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main server configuration
///
/// Built once at startup by [`load_config`](super::load_config) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host/IP to bind to (default: 0.0.0.0)
    pub host: HostName,
    /// Port to listen on (default: 80)
    pub port: Port,
    /// Interval between periodic summaries (default: 1s)
    pub print_delay: PrintDelay,
    /// Operating mode (default: count)
    pub mode: Mode,
    /// Token served at the claim endpoint; `None` disables it
    pub claim_token: Option<ClaimToken>,
    /// Maximum time to wait for in-flight requests on shutdown; `None` waits forever
    pub shutdown_grace: Option<Duration>,
    /// Worker threads; `None` uses one per CPU core
    pub threads: Option<ThreadCount>,
}

impl Config {
    /// Formatted listen address (e.g., "0.0.0.0:80")
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: super::defaults::host(),
            port: Port::DEFAULT,
            print_delay: PrintDelay::DEFAULT,
            mode: Mode::default(),
            claim_token: None,
            shutdown_grace: super::defaults::shutdown_grace(),
            threads: None,
        }
    }
}
