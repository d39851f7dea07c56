//! Command-line argument parsing
//!
//! Every setting can come from a flag or an environment variable; the flag wins.

use crate::constants::defaults;
use crate::types::{Port, PrintDelay};
use clap::Parser;
use std::path::PathBuf;

/// HTTP echo server for scale tests
///
/// Echoes request bodies, counts requests and bytes, and serves aggregated
/// statistics at /stat.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(short, long, default_value = "80", env = "PORT")]
    pub port: Port,

    /// Delay between traffic summaries in seconds (count mode)
    #[arg(short, long, default_value = "1", env = "PRINT_DELAY")]
    pub delay: PrintDelay,

    /// Mode of operation: count or log
    ///
    /// - count: aggregate silently, print a summary every delay
    /// - log: print every request (line, headers, body)
    #[arg(short, long, default_value = defaults::MODE, env = "MODE")]
    pub mode: String,

    /// Token to serve at /.well-known/scale-test-claim-token.txt (empty disables)
    #[arg(
        long = "sct-token",
        alias = "sct_token",
        default_value = "",
        hide_default_value = true,
        env = "SCT_TOKEN"
    )]
    pub sct_token: String,

    /// Host to bind to
    #[arg(long, default_value = defaults::HOST, env = "HOST")]
    pub host: String,

    /// Seconds to wait for in-flight requests on shutdown (0 waits forever)
    #[arg(long, default_value = "30", env = "SHUTDOWN_GRACE")]
    pub shutdown_grace: u64,

    /// Number of worker threads (0 uses one per CPU core)
    #[arg(short, long, default_value = "0", env = "THREADS")]
    pub threads: usize,

    /// Also write diagnostics to this file
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
