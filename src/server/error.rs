//! Lifecycle errors for the echo server

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by [`EchoServer`](super::EchoServer)
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServerError {
    /// The listener could not be bound (port in use, permission denied, ...)
    #[error("Error starting server on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The listener failed while serving
    #[error("Error serving requests: {0}")]
    Serve(#[source] std::io::Error),

    /// In-flight requests did not finish within the grace period
    #[error("Error shutting down server: requests still in flight after {0:?}")]
    ShutdownTimeout(Duration),
}

impl ServerError {
    /// True for failures that happen after shutdown was requested
    ///
    /// These are reported but do not make the process exit abnormally.
    #[must_use]
    pub const fn is_shutdown_failure(&self) -> bool {
        matches!(self, Self::ShutdownTimeout(_))
    }
}
