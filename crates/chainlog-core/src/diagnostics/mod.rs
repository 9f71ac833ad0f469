//! Internal diagnostics for the logging pipeline itself
//!
//! These are not the records a host application logs; they describe what the
//! write queue is doing (writer lifecycle, failed writes). Components take a
//! `SharedDiagnostics` at construction and default to `NoOpDiagnostics`.

mod traits;
mod noop;
mod stderr;

pub use traits::{Diagnostics, Level, SharedDiagnostics, report_fmt};
pub use noop::NoOpDiagnostics;
pub use stderr::{StderrDiagnostics, ENV_LEVEL};
