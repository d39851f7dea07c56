//! Logging setup: stdout plus an optional plain-text log file
//!
//! Only diagnostics go through `tracing`. The per-period traffic lines and the
//! `log` mode request blocks are product output and go through
//! [`Console`](crate::console::Console) instead, so `RUST_LOG` never hides them.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging to stdout, and to `log_file` when given
///
/// Both outputs use the level from the `RUST_LOG` environment variable,
/// defaulting to "info". The returned guard flushes the file writer when
/// dropped; hold it for the lifetime of the program.
///
/// Calling this twice is harmless: the second global subscriber is ignored.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(env_filter());

    let Some(path) = log_file else {
        let _ = tracing_subscriber::registry().with(stdout_layer).try_init();
        return Ok(None);
    };

    let appender = file_appender(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter());

    let _ = tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    Ok(Some(guard))
}

/// Non-rotating appender for `path`; a bare file name lands in the working directory
fn file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map_or_else(|| "scale-echo.log".into(), |name| name.to_string_lossy());
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
}
