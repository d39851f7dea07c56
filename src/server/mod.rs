//! HTTP echo server
//!
//! [`EchoServer`] owns the traffic counters, the route table and the
//! shutdown token. The route table serves three things:
//! - `/stat`: statistics snapshot (JSON, or HTML with `?format=html`)
//! - `/.well-known/scale-test-claim-token.txt`: the configured claim token
//! - anything else: echo of the request body, counted and optionally logged

mod accounting;
mod error;
mod handlers;
mod lifecycle;
mod render;
mod router;

use std::sync::Arc;

use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, Mode};
use crate::console::Console;
use crate::metrics::TrafficCounters;
use crate::types::ClaimToken;

pub use accounting::format_request_block;
pub use error::ServerError;
pub use lifecycle::LifecyclePhase;
pub use render::{StatsFormat, render_html, render_json};
pub use router::build_router;

use lifecycle::PhaseCell;

/// State shared by all request handlers
///
/// Cheap to clone: counters and console are handles, the token is behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ServerState {
    counters: TrafficCounters,
    console: Console,
    mode: Mode,
    claim_token: Option<Arc<ClaimToken>>,
}

impl ServerState {
    #[must_use]
    pub fn new(config: &Config, counters: TrafficCounters, console: Console) -> Self {
        Self {
            counters,
            console,
            mode: config.mode,
            claim_token: config.claim_token.clone().map(Arc::new),
        }
    }

    #[must_use]
    pub fn counters(&self) -> &TrafficCounters {
        &self.counters
    }
}

/// The echo server and its supervised background tasks
#[derive(Debug)]
pub struct EchoServer {
    config: Config,
    state: ServerState,
    phase: PhaseCell,
    shutdown: CancellationToken,
}

impl EchoServer {
    /// Create a server writing its console output to stdout
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_console(config, Console::stdout())
    }

    /// Create a server writing its console output to `console`
    #[must_use]
    pub fn with_console(config: Config, console: Console) -> Self {
        let state = ServerState::new(&config, TrafficCounters::new(), console);
        Self {
            config,
            state,
            phase: PhaseCell::new(LifecyclePhase::Starting),
            shutdown: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn counters(&self) -> &TrafficCounters {
        self.state.counters()
    }

    /// Current lifecycle phase
    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase.get()
    }

    /// Token that starts graceful shutdown when cancelled
    #[must_use]
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Route table bound to this server's state
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }
}
