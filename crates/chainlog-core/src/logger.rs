//! Logger façade
//!
//! A `Logger` combines an optional console sink with an optional file target.
//! Every `log()` call goes to the console sink synchronously and, when a
//! target is configured, is formatted and queued for the target without
//! waiting for the write.
//!
//! ```no_run
//! use std::fs::OpenOptions;
//! use std::sync::Arc;
//! use chainlog_core::{log, Logger};
//! use chainlog_core::sink::ConsoleSink;
//! use chainlog_core::target::FileTarget;
//!
//! # async fn run() -> chainlog_core::LogResult<()> {
//! let file = Arc::new(OpenOptions::new().create(true).append(true).open("chain.log")?);
//! let logger = Logger::new(
//!     Some(Arc::new(FileTarget::new(file.clone()))),
//!     Some(Arc::new(ConsoleSink::new())),
//! )?;
//!
//! log!(logger, "eth_blockNumber");
//! log!(logger, "mined block", 12);
//!
//! if let Some(handle) = logger.wait_handle() {
//!     handle.await?;
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::diagnostics::{NoOpDiagnostics, SharedDiagnostics};
use crate::error::LogResult;
use crate::format::format_message;
use crate::queue::{QueueStatus, WaitHandle, WriteQueue};
use crate::sink::{LogSink, SharedSink};
use crate::target::SharedTarget;

/// Fire-and-forget logger with an optional file target
///
/// Cheap to clone; clones share the same console sink and write queue.
/// The logger never closes its file target explicitly.
#[derive(Clone, Default)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

#[derive(Default)]
struct LoggerInner {
    console: Option<SharedSink>,
    queue: Option<WriteQueue>,
}

impl Logger {
    /// Create a logger for an optional target and console sink
    ///
    /// With neither configured the logger does nothing. A target requires a
    /// running tokio runtime.
    ///
    /// The logger never closes a file itself, but a `FileTarget` shares
    /// ownership of its `Arc<File>`: if the caller drops its own clone first,
    /// the descriptor closes when the last logger clone (and its writer task)
    /// goes away. Keep a clone to control when the file is released.
    pub fn new(target: Option<SharedTarget>, console: Option<SharedSink>) -> LogResult<Self> {
        Self::with_diagnostics(target, console, Arc::new(NoOpDiagnostics::new()))
    }

    /// Create a logger whose write queue reports to `diagnostics`
    pub fn with_diagnostics(
        target: Option<SharedTarget>,
        console: Option<SharedSink>,
        diagnostics: SharedDiagnostics,
    ) -> LogResult<Self> {
        let queue = target
            .map(|target| WriteQueue::spawn_with_diagnostics(target, diagnostics))
            .transpose()?;

        Ok(Self {
            inner: Arc::new(LoggerInner { console, queue }),
        })
    }

    /// Console-only logger
    pub fn console(sink: SharedSink) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                console: Some(sink),
                queue: None,
            }),
        }
    }

    /// Logger that discards everything
    pub fn noop() -> Self {
        Self::default()
    }

    /// Log a message with its params
    ///
    /// The console sink sees the original values; the file receives one
    /// timestamped line per `\n`-separated segment of the rendered text.
    /// Never waits for file I/O and never reports write failures; those
    /// surface through `wait_handle`.
    pub fn log(&self, message: &Value, params: &[Value]) {
        if let Some(console) = &self.inner.console {
            console.log(message, params);
        }

        if let Some(queue) = &self.inner.queue {
            queue.enqueue(format_message(message, params).into_bytes());
        }
    }

    /// Completion handle for every write queued so far
    ///
    /// `None` when the logger has no file target.
    pub fn wait_handle(&self) -> Option<WaitHandle> {
        self.inner.queue.as_ref().map(WriteQueue::wait_handle)
    }

    /// Whether a file target is attached
    pub fn has_target(&self) -> bool {
        self.inner.queue.is_some()
    }

    /// Whether a console sink is attached
    pub fn has_console(&self) -> bool {
        self.inner.console.is_some()
    }

    /// Write queue state, when a file target is attached
    pub fn status(&self) -> Option<QueueStatus> {
        self.inner.queue.as_ref().map(WriteQueue::status)
    }

    /// Whether two loggers share the same sink and queue
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl LogSink for Logger {
    fn log(&self, message: &Value, params: &[Value]) {
        Logger::log(self, message, params)
    }

    fn as_logger(&self) -> Option<Logger> {
        Some(self.clone())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("console", &self.has_console())
            .field("queue", &self.inner.queue)
            .finish()
    }
}

/// Log through anything with a `log(&Value, &[Value])` method
///
/// Each argument is converted with `serde_json::Value::from`.
///
/// ```
/// use chainlog_core::{log, Logger};
///
/// let logger = Logger::noop();
/// log!(logger, "message");
/// log!(logger, "message", "param1", 2);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $logger.log(
            &$crate::Value::from($message),
            &[$($crate::Value::from($param)),*],
        )
    };
}
