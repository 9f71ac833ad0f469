//! Options resolution

use std::fs::File;
use std::sync::Arc;

use super::file::{FileOption, open_log_file};
use crate::diagnostics::{NoOpDiagnostics, SharedDiagnostics};
use crate::error::LogResult;
use crate::logger::Logger;
use crate::sink::{default_sink, SharedSink};
use crate::target::{FileTarget, SharedTarget};
use crate::diag_info;

/// User-facing logging options
///
/// # Example
///
/// ```no_run
/// use chainlog_core::options::LoggingOptions;
///
/// # async fn run() -> chainlog_core::LogResult<()> {
/// let logger = LoggingOptions::new()
///     .file("chain.log")
///     .quiet(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct LoggingOptions {
    file: Option<FileOption>,
    logger: Option<SharedSink>,
    quiet: bool,
    diagnostics: Option<SharedDiagnostics>,
}

impl LoggingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write logs to this file as well
    pub fn file(mut self, file: impl Into<FileOption>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Use a custom sink instead of the default console
    pub fn logger(mut self, logger: SharedSink) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Suppress the default console sink
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Report write-queue activity here
    pub fn diagnostics(mut self, diagnostics: SharedDiagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn file_option(&self) -> Option<&FileOption> {
        self.file.as_ref()
    }

    /// Open the file and pick the console sink, using the stdout default
    pub fn resolve(self) -> LogResult<ResolvedOptions> {
        self.resolve_with_default(default_sink())
    }

    /// Open the file and pick the console sink against a given default
    ///
    /// A custom logger always wins over `quiet`; `quiet` only drops the
    /// default. File-open failures are reported here, before any logger
    /// exists.
    pub fn resolve_with_default(self, default: SharedSink) -> LogResult<ResolvedOptions> {
        let file = self.file.as_ref().map(open_log_file).transpose()?;

        let console = match self.logger {
            Some(logger) => Some(logger),
            None if self.quiet => None,
            None => Some(default),
        };

        Ok(ResolvedOptions {
            file,
            console,
            quiet: self.quiet,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(NoOpDiagnostics::new())),
        })
    }

    /// Resolve and build a logger with the stdout default
    pub fn build(self) -> LogResult<Logger> {
        self.resolve()?.into_logger()
    }

    /// Resolve and build a logger against a given default sink
    pub fn build_with_default(self, default: SharedSink) -> LogResult<Logger> {
        self.resolve_with_default(default)?.into_logger()
    }
}

impl std::fmt::Debug for LoggingOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingOptions")
            .field("file", &self.file)
            .field("logger", &self.logger.is_some())
            .field("quiet", &self.quiet)
            .finish()
    }
}

/// Options after the file has been opened
pub struct ResolvedOptions {
    /// Open log file handle, shared with the caller
    pub file: Option<Arc<File>>,
    /// Effective console sink
    pub console: Option<SharedSink>,
    pub quiet: bool,
    diagnostics: SharedDiagnostics,
}

impl ResolvedOptions {
    /// Build the logger
    ///
    /// When the console sink is itself a `Logger` that already writes to a
    /// file, it is returned unchanged so nothing is written twice. A
    /// `Logger` without a file target is treated like any other sink.
    pub fn into_logger(self) -> LogResult<Logger> {
        let integrated = self
            .console
            .as_ref()
            .and_then(|sink| sink.as_logger())
            .filter(Logger::has_target);

        if let Some(existing) = integrated {
            if self.file.is_some() {
                diag_info!(
                    self.diagnostics,
                    "reusing the supplied logger; its own file output is kept"
                );
            }
            return Ok(existing);
        }

        let target = self
            .file
            .map(|file| -> SharedTarget { Arc::new(FileTarget::new(file)) });
        Logger::with_diagnostics(target, self.console, self.diagnostics)
    }
}

impl std::fmt::Debug for ResolvedOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedOptions")
            .field("file", &self.file)
            .field("console", &self.console.is_some())
            .field("quiet", &self.quiet)
            .finish()
    }
}
