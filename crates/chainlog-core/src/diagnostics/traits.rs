//! Diagnostics trait definition

use std::sync::Arc;

/// Severity of a diagnostic report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Parse `debug`/`info`/`warn`/`error`, ignoring case
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver for what the write queue and options layer are doing
///
/// Writer lifecycle is reported at `Debug`, reuse decisions at `Info`,
/// failed writes at `Warn` and writes dropped because the writer is gone at
/// `Error`.
pub trait Diagnostics: Send + Sync {
    fn report(&self, level: Level, message: &str);

    /// Formats only when the report will be kept
    fn enabled(&self, _level: Level) -> bool {
        true
    }
}

/// Type alias for an Arc-wrapped diagnostics sink
pub type SharedDiagnostics = Arc<dyn Diagnostics>;

/// Report with format arguments, skipping formatting for filtered levels
pub fn report_fmt<D: Diagnostics + ?Sized>(diag: &D, level: Level, args: std::fmt::Arguments<'_>) {
    if diag.enabled(level) {
        diag.report(level, &args.to_string());
    }
}

#[macro_export]
macro_rules! diag_debug {
    ($diag:expr, $($arg:tt)*) => {
        $crate::diagnostics::report_fmt(&*$diag, $crate::diagnostics::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_info {
    ($diag:expr, $($arg:tt)*) => {
        $crate::diagnostics::report_fmt(&*$diag, $crate::diagnostics::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_warn {
    ($diag:expr, $($arg:tt)*) => {
        $crate::diagnostics::report_fmt(&*$diag, $crate::diagnostics::Level::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_error {
    ($diag:expr, $($arg:tt)*) => {
        $crate::diagnostics::report_fmt(&*$diag, $crate::diagnostics::Level::Error, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order_and_parse() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
        assert_eq!(Level::parse("WARNING"), Some(Level::Warn));
        assert_eq!(Level::parse("Error"), Some(Level::Error));
        assert_eq!(Level::parse("loud"), None);
        assert_eq!(Level::Info.to_string(), "INFO");
    }
}
