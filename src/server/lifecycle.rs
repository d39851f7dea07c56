//! Server lifecycle: bind, serve, graceful shutdown
//!
//! Phases move `Starting → Running → ShuttingDown → Stopped`. A bind failure
//! moves straight to `Failed`. Shutdown is triggered only by cancelling the
//! server's shutdown token (the binary cancels it on SIGINT/SIGTERM).

use std::future::IntoFuture;
use std::sync::atomic::{AtomicU8, Ordering};

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::formatting::{format_byte_rate, format_bytes};
use crate::metrics::TrafficStats;
use crate::reporter::PeriodicReporter;

use super::{EchoServer, ServerError};

/// Lifecycle phase of an [`EchoServer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Constructed, listener not yet serving
    Starting,
    /// Listener accepting connections
    Running,
    /// Shutdown requested, in-flight requests draining
    ShuttingDown,
    /// Listener fully stopped
    Stopped,
    /// Listener could not start or failed while serving
    Failed,
}

impl LifecyclePhase {
    /// True once the server can no longer serve
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped | Self::Failed)
    }
}

impl From<u8> for LifecyclePhase {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Starting,
            1 => Self::Running,
            2 => Self::ShuttingDown,
            3 => Self::Stopped,
            _ => Self::Failed,
        }
    }
}

impl From<LifecyclePhase> for u8 {
    fn from(phase: LifecyclePhase) -> Self {
        match phase {
            LifecyclePhase::Starting => 0,
            LifecyclePhase::Running => 1,
            LifecyclePhase::ShuttingDown => 2,
            LifecyclePhase::Stopped => 3,
            LifecyclePhase::Failed => 4,
        }
    }
}

/// Lock-free holder for the current phase
#[derive(Debug)]
pub(super) struct PhaseCell(AtomicU8);

impl PhaseCell {
    pub(super) fn new(phase: LifecyclePhase) -> Self {
        Self(AtomicU8::new(phase.into()))
    }

    #[inline]
    pub(super) fn get(&self) -> LifecyclePhase {
        self.0.load(Ordering::Acquire).into()
    }

    #[inline]
    pub(super) fn set(&self, phase: LifecyclePhase) {
        self.0.store(phase.into(), Ordering::Release);
    }
}

impl EchoServer {
    /// Bind the configured listen address
    ///
    /// # Errors
    /// Returns [`ServerError::Bind`] and moves to `Failed` if binding fails.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr = self.config.listen_addr();
        match TcpListener::bind(&addr).await {
            Ok(listener) => Ok(listener),
            Err(source) => {
                self.phase.set(LifecyclePhase::Failed);
                Err(ServerError::Bind { addr, source })
            }
        }
    }

    /// Bind the configured address and serve until shutdown
    ///
    /// # Errors
    /// See [`bind`](Self::bind) and [`serve`](Self::serve).
    pub async fn run(&self) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until the shutdown token is cancelled
    ///
    /// Starts the periodic reporter in `count` mode. Once shutdown is
    /// requested the listener stops accepting and in-flight requests get up to
    /// the configured grace period to finish.
    ///
    /// # Errors
    /// Returns [`ServerError::ShutdownTimeout`] when the grace period expires
    /// (the server is still `Stopped`), or [`ServerError::Serve`] if the
    /// listener itself fails.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), ServerError> {
        let addr = listener
            .local_addr()
            .map_or_else(|_| self.config.listen_addr(), |a| a.to_string());

        let reporter = self.spawn_reporter();

        let server = axum::serve(listener, self.router())
            .with_graceful_shutdown(self.shutdown.clone().cancelled_owned())
            .into_future();
        tokio::pin!(server);

        self.phase.set(LifecyclePhase::Running);
        info!("Echoserver on {} ({} mode)", addr, self.config.mode);

        let result = tokio::select! {
            result = &mut server => result.map_err(ServerError::Serve),
            () = self.shutdown.cancelled() => {
                self.phase.set(LifecyclePhase::ShuttingDown);
                info!("Shutdown signal received, waiting for in-flight requests");
                match self.config.shutdown_grace {
                    Some(grace) => match tokio::time::timeout(grace, &mut server).await {
                        Ok(result) => result.map_err(ServerError::Serve),
                        Err(_) => Err(ServerError::ShutdownTimeout(grace)),
                    },
                    None => (&mut server).await.map_err(ServerError::Serve),
                }
            }
        };

        // Background tasks stop with the listener, however it ended
        self.shutdown.cancel();
        if let Some(handle) = reporter {
            if let Err(e) = handle.await {
                warn!("Periodic reporter task failed: {}", e);
            }
        }

        match &result {
            Ok(()) => {
                self.phase.set(LifecyclePhase::Stopped);
                info!("Graceful shutdown complete");
            }
            Err(e) if e.is_shutdown_failure() => self.phase.set(LifecyclePhase::Stopped),
            Err(_) => self.phase.set(LifecyclePhase::Failed),
        }
        self.log_traffic_summary();

        result
    }

    fn spawn_reporter(&self) -> Option<JoinHandle<()>> {
        if !self.config.mode.runs_reporter() {
            debug!("Periodic reporter disabled in {} mode", self.config.mode);
            return None;
        }

        let reporter = PeriodicReporter::new(
            self.state.counters.clone(),
            self.state.console.clone(),
            self.config.print_delay,
        );
        Some(reporter.spawn(self.shutdown.child_token()))
    }

    fn log_traffic_summary(&self) {
        let totals = self.counters().snapshot_totals();
        let stats = TrafficStats::from_totals(&totals);
        info!(
            "Served {} requests ({}, {}) in {}",
            totals.total_requests,
            format_bytes(totals.total_bytes),
            format_byte_rate(stats.avg_bytes_per_sec),
            totals.format_uptime()
        );
    }
}
