//! Destinations for `print` output.
//!
//! The printer produces finished text (newlines included); a handler only
//! decides where that text goes:
//! - Stdout: batch runs (default)
//! - Buffer: the playground and tests, which read output back
//! - Silent: hosts that evaluate for a result only
//!
//! The set of sinks is closed, so dispatch is a plain enum match.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// In-memory sink. Safe to share between threads.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler::default()
    }

    pub fn write(&self, text: &str) {
        self.buffer.lock().push_str(text);
    }

    /// Copy of everything written so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Drain the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Where `print` output goes.
#[derive(Debug)]
pub enum PrintHandlerImpl {
    /// Process stdout.
    Stdout,
    /// Captured in memory.
    Buffer(BufferPrintHandler),
    /// Discarded.
    Silent,
}

impl PrintHandlerImpl {
    /// Write already formatted text.
    pub fn write(&self, text: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // A closed stdout is not a program fault; drop the output.
                if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
                    tracing::warn!(%err, "failed to write print output");
                }
            }
            Self::Buffer(h) => h.write(text),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drain captured output. Empty for handlers that do not capture.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between a runtime and the builtins it hands out.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Handler writing to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// Handler capturing output in memory.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Handler discarding all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
