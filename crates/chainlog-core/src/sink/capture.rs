//! Recording sink for tests and embedding hosts

use parking_lot::Mutex;
use serde_json::Value;

use super::traits::LogSink;

/// One recorded `log()` call
#[derive(Debug, Clone, PartialEq)]
pub struct SinkCall {
    pub message: Value,
    pub params: Vec<Value>,
}

/// Sink that records every call in memory
#[derive(Debug, Default)]
pub struct CaptureSink {
    calls: Mutex<Vec<SinkCall>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, in call order
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().clone()
    }

    /// Number of calls so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of calls whose message equals `message`
    pub fn count_with_message(&self, message: &Value) -> usize {
        self.calls.lock().iter().filter(|c| &c.message == message).count()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl LogSink for CaptureSink {
    fn log(&self, message: &Value, params: &[Value]) {
        self.calls.lock().push(SinkCall {
            message: message.clone(),
            params: params.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capture_sink_records_calls() {
        let sink = CaptureSink::new();
        sink.log(&json!("message"), &[json!("param1"), json!("param2")]);
        sink.log(&json!("other"), &[]);

        assert_eq!(sink.call_count(), 2);
        assert_eq!(sink.count_with_message(&json!("message")), 1);
        assert_eq!(
            sink.calls()[0],
            SinkCall {
                message: json!("message"),
                params: vec![json!("param1"), json!("param2")],
            }
        );

        sink.clear();
        assert_eq!(sink.call_count(), 0);
    }
}
