//! No-op diagnostics

use super::traits::{Diagnostics, Level};

/// Diagnostics that discard everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnostics;

impl NoOpDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for NoOpDiagnostics {
    fn report(&self, _level: Level, _message: &str) {}

    fn enabled(&self, _level: Level) -> bool {
        false
    }
}
