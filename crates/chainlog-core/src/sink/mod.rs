//! Console sinks
//!
//! A sink is anything that exposes a single `log(message, params)` operation.
//! Sinks are called synchronously on every `log()` call:
//! - `ConsoleSink`: stdout, the default
//! - `NoOpSink`: discards everything
//! - `FnSink`: wraps a closure supplied by the host
//! - `CaptureSink`: records calls, for testing

mod traits;
mod console;
mod capture;

pub use traits::{LogSink, SharedSink, FnSink, NoOpSink};
pub use console::{ConsoleSink, default_sink};
pub use capture::{CaptureSink, SinkCall};
