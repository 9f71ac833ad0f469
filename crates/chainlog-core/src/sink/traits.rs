//! Sink trait definition

use std::sync::Arc;

use serde_json::Value;

use crate::logger::Logger;

/// Something that accepts `log(message, params)` calls
///
/// `params` is always handed over as one collected slice, never spread.
/// Panics inside a sink are not caught; they reach the caller of `log()`.
pub trait LogSink: Send + Sync {
    /// Record one message with its params
    fn log(&self, message: &Value, params: &[Value]);

    /// The crate's own `Logger`, when this sink is one
    ///
    /// A `Logger` already writes to its file target, so callers that would
    /// otherwise wrap it with another file writer reuse it instead.
    fn as_logger(&self) -> Option<Logger> {
        None
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LogSink>;

/// A sink that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl LogSink for NoOpSink {
    fn log(&self, _message: &Value, _params: &[Value]) {}
}

/// A sink backed by a closure
///
/// # Example
///
/// ```
/// use chainlog_core::sink::{FnSink, LogSink};
/// use serde_json::{json, Value};
///
/// let sink = FnSink::new(|message: &Value, params: &[Value]| {
///     println!("{} ({} params)", message, params.len());
/// });
/// sink.log(&json!("hello"), &[]);
/// ```
pub struct FnSink<F> {
    func: F,
}

impl<F> FnSink<F>
where
    F: Fn(&Value, &[Value]) + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> LogSink for FnSink<F>
where
    F: Fn(&Value, &[Value]) + Send + Sync,
{
    fn log(&self, message: &Value, params: &[Value]) {
        (self.func)(message, params)
    }
}

impl<F> std::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}
