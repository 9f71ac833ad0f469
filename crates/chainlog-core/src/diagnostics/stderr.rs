//! Stderr diagnostics

use super::traits::{Diagnostics, Level};

/// Environment variable holding the minimum level, e.g. `CHAINLOG_DIAGNOSTICS=debug`
pub const ENV_LEVEL: &str = "CHAINLOG_DIAGNOSTICS";

/// Diagnostics written to stderr
///
/// Stdout is left alone because the default console sink writes there.
/// Reports below `min_level` are dropped before formatting.
#[derive(Debug, Clone)]
pub struct StderrDiagnostics {
    prefix: String,
    min_level: Level,
}

impl Default for StderrDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl StderrDiagnostics {
    /// Warnings and errors, with the default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[chainlog]".to_string(),
            min_level: Level::Warn,
        }
    }

    /// Minimum level taken from `CHAINLOG_DIAGNOSTICS`, `Warn` when unset or unknown
    pub fn from_env() -> Self {
        let min_level = std::env::var(ENV_LEVEL)
            .ok()
            .and_then(|v| Level::parse(&v))
            .unwrap_or(Level::Warn);
        Self::new().with_min_level(min_level)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    fn render(&self, level: Level, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Diagnostics for StderrDiagnostics {
    fn report(&self, level: Level, message: &str) {
        if self.enabled(level) {
            eprintln!("{}", self.render(level, message));
        }
    }

    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::diagnostics::SharedDiagnostics;

    #[test]
    fn test_render_and_filter() {
        let diag = StderrDiagnostics::new();
        assert_eq!(diag.render(Level::Warn, "write failed"), "[chainlog] WARN: write failed");
        assert!(!diag.enabled(Level::Info));
        assert!(diag.enabled(Level::Error));

        let verbose = StderrDiagnostics::new()
            .with_prefix("[ganache]")
            .with_min_level(Level::Debug);
        assert_eq!(verbose.render(Level::Info, "ready"), "[ganache] INFO: ready");
        assert!(verbose.enabled(Level::Debug));
    }

    #[test]
    fn test_diag_macros() {
        let diag: SharedDiagnostics = Arc::new(StderrDiagnostics::new().with_min_level(Level::Debug));
        crate::diag_debug!(diag, "queued {} writes", 3);
        crate::diag_error!(diag, "write #{} dropped", 1);
    }
}
