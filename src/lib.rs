//! # scale-echo
//!
//! HTTP echo server for scale and load testing.
//!
//! Every request that does not hit a reserved path is echoed back and counted.
//! The server keeps cumulative and per-period traffic counters, prints a
//! traffic line every period (`count` mode) or a full dump of every request
//! (`log` mode), and serves live statistics at `/stat`.
//!
//! ## Modules
//!
//! - [`metrics`]: lock-free traffic counters and derived statistics
//! - [`reporter`]: periodic drain-and-print task
//! - [`server`]: routes, handlers and the lifecycle of [`EchoServer`]
//! - [`config`]: validated runtime configuration built from [`ServerArgs`]

#[cfg(test)]
#[macro_use]
mod test_macros;

pub mod args;
pub mod config;
pub mod console;
pub mod constants;
pub mod formatting;
pub mod logging;
pub mod metrics;
pub mod reporter;
pub mod runtime;
pub mod server;
pub mod types;

pub use args::ServerArgs;
pub use config::{Config, ConfigError, Mode, load_config};
pub use console::Console;
pub use metrics::{PeriodTotals, TotalsSnapshot, TrafficCounters, TrafficStats};
pub use reporter::PeriodicReporter;
pub use runtime::{RuntimeConfig, shutdown_signal, spawn_shutdown_handler};
pub use server::{EchoServer, LifecyclePhase, ServerError, ServerState, build_router};
