//! Chainlog Core
//!
//! Asynchronous log sink for a host application: console output is
//! immediate, file output is queued and written in call order without
//! blocking the caller, and a wait handle reports when everything queued so
//! far has landed (or which write failed first).
//!
//! ## File output
//!
//! Each `\n`-separated segment of a message becomes one line prefixed with
//! an ISO-8601 UTC millisecond timestamp:
//!
//! ```text
//! 2024-01-31T12:00:00.123Z multi
//! 2024-01-31T12:00:00.123Z line
//! ```
//!
//! ```rust,no_run
//! use chainlog_core::{log, options::LoggingOptions};
//!
//! # async fn run() -> chainlog_core::LogResult<()> {
//! let logger = LoggingOptions::new().file("chain.log").build()?;
//!
//! log!(logger, "eth_sendTransaction");
//! log!(logger, "gas used", 21000);
//!
//! // Before exit: wait for every queued write
//! if let Some(handle) = logger.wait_handle() {
//!     handle.await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod diagnostics;
pub mod format;
pub mod sink;
pub mod target;
pub mod queue;
pub mod logger;
pub mod options;

// Re-export commonly used types
pub use serde_json::Value;

pub use error::{LogError, LogResult};

pub use diagnostics::{Diagnostics, Level, NoOpDiagnostics, StderrDiagnostics, SharedDiagnostics};

pub use sink::{LogSink, SharedSink, ConsoleSink, NoOpSink, FnSink, CaptureSink};

pub use target::{LogTarget, SharedTarget, FileTarget, MemoryTarget};

pub use queue::{WriteQueue, WaitHandle, QueueStatus};

pub use logger::Logger;

pub use options::{LoggingOptions, LoggingConfig, FileOption, open_log_file};
