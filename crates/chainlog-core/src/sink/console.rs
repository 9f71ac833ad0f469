//! Stdout sink

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;

use super::traits::{LogSink, SharedSink};
use crate::format::value_text;

/// Writes each message and its params to stdout on one line
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    /// The line printed for a message and its params
    pub fn render(message: &Value, params: &[Value]) -> String {
        std::iter::once(message)
            .chain(params)
            .map(value_text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl LogSink for ConsoleSink {
    fn log(&self, message: &Value, params: &[Value]) {
        println!("{}", Self::render(message, params));
    }
}

/// Process-wide default sink, read when options are resolved
static DEFAULT_SINK: Lazy<SharedSink> = Lazy::new(|| Arc::new(ConsoleSink::new()));

/// The default console sink (stdout)
pub fn default_sink() -> SharedSink {
    DEFAULT_SINK.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_console_render() {
        assert_eq!(ConsoleSink::render(&json!("message"), &[]), "message");
        assert_eq!(
            ConsoleSink::render(&json!("message"), &[json!("param1"), json!(true)]),
            "message param1 true"
        );
    }

    #[test]
    fn test_default_sink_is_shared() {
        let a = default_sink();
        let b = default_sink();
        assert!(Arc::ptr_eq(&a, &b));
        a.log(&json!("console sink smoke test"), &[]);
    }
}
