//! Console output sink for traffic summaries and logged requests
//!
//! Diagnostics go through `tracing`. The lines operators actually read during a
//! scale test (periodic summaries, request dumps in `log` mode) are product
//! output and are written verbatim through a [`Console`].
//!
//! Each call writes one pre-formatted block while holding the sink lock, so
//! blocks from concurrent requests never interleave.

use crate::constants::console::TIMESTAMP_FORMAT;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Cloneable handle to the process console (or a capture buffer in tests)
#[derive(Clone)]
pub struct Console {
    out: SharedWriter,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Console {
    /// Console writing to the process stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(std::io::stdout())
    }

    /// Console writing to an arbitrary sink
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Console writing into an in-memory buffer, plus a handle to read it back
    #[must_use]
    pub fn capture() -> (Self, CapturedOutput) {
        let captured = CapturedOutput::default();
        (Self::from_writer(captured.clone()), captured)
    }

    /// Write one complete block
    ///
    /// Output is best effort: a broken stdout must never fail a request, so
    /// write errors are logged and dropped.
    ///
    /// The write blocks the calling worker thread while the lock is held, as
    /// a plain `print!` would. Blocks are pre-formatted before locking and the
    /// guard never lives across an `.await`.
    pub fn write_block(&self, block: &str) {
        let mut out = lock_ignoring_poison(&self.out);
        if let Err(e) = out.write_all(block.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!("Failed to write console output: {}", e);
        }
    }

    /// Write one line, appending the newline
    pub fn write_line(&self, line: &str) {
        let mut block = String::with_capacity(line.len() + 1);
        block.push_str(line);
        block.push('\n');
        self.write_block(&block);
    }
}

/// In-memory console output, readable after the fact
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Everything written so far, decoded lossily
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock_ignoring_poison(&self.buf)).into_owned()
    }

    /// Number of complete lines written so far
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.contents().lines().count()
    }

    /// True if nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock_ignoring_poison(&self.buf).is_empty()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        lock_ignoring_poison(&self.buf).extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Local wall-clock timestamp used as prefix for console output
#[must_use]
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn lock_ignoring_poison<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
