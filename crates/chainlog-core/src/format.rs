//! Line formatting for file output
//!
//! Every `\n`-delimited segment of a message becomes its own line, prefixed
//! with an ISO-8601 UTC timestamp (millisecond precision) and a single space:
//!
//! ```text
//! 2024-01-31T12:00:00.123Z first segment
//! 2024-01-31T12:00:00.123Z second segment
//! ```
//!
//! A single instant is taken per `log()` call and shared by all of its
//! lines, so multi-line messages stay visually grouped.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Length of a rendered timestamp, e.g. `2024-01-31T12:00:00.123Z`
pub const TIMESTAMP_LEN: usize = 24;

/// Render an instant as `YYYY-MM-DDTHH:mm:ss.sssZ`
pub fn timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Textual form of a log value
///
/// Strings are used verbatim (no JSON quoting); everything else uses its
/// JSON rendering.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text written to the file for one `log()` call
///
/// Params are appended to the message separated by single spaces.
pub fn render_text(message: &Value, params: &[Value]) -> String {
    let mut text = value_text(message);
    for param in params {
        text.push(' ');
        text.push_str(&value_text(param));
    }
    text
}

/// Split `text` on `\n` and prefix each segment with the timestamp for `instant`
pub fn format_lines(text: &str, instant: DateTime<Utc>) -> Vec<String> {
    let prefix = timestamp(instant);
    text.split('\n')
        .map(|segment| format!("{} {}\n", prefix, segment))
        .collect()
}

/// All lines for `text` concatenated into a single write buffer
pub fn format_buffer(text: &str, instant: DateTime<Utc>) -> String {
    format_lines(text, instant).concat()
}

/// Format a message and its params at the current instant
pub fn format_message(message: &Value, params: &[Value]) -> String {
    format_buffer(&render_text(message, params), Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 31, 12, 5, 9).unwrap() + chrono::Duration::milliseconds(7)
    }

    fn is_timestamp(s: &str) -> bool {
        let b = s.as_bytes();
        s.len() == TIMESTAMP_LEN
            && b.iter().enumerate().all(|(i, c)| match i {
                4 | 7 => *c == b'-',
                10 => *c == b'T',
                13 | 16 => *c == b':',
                19 => *c == b'.',
                23 => *c == b'Z',
                _ => c.is_ascii_digit(),
            })
    }

    #[test]
    fn test_timestamp_shape() {
        assert_eq!(timestamp(fixed_instant()), "2024-01-31T12:05:09.007Z");
        assert!(is_timestamp(&timestamp(Utc::now())));

        // Whole seconds still carry three fractional digits
        let whole = Utc.with_ymd_and_hms(2030, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(timestamp(whole), "2030-12-01T00:00:00.000Z");
    }

    #[test]
    fn test_single_segment() {
        let lines = format_lines("message", fixed_instant());
        assert_eq!(lines, vec!["2024-01-31T12:05:09.007Z message\n".to_string()]);
    }

    #[test]
    fn test_multi_line_shares_one_timestamp() {
        let lines = format_lines("multi\nline\nmessage", fixed_instant());
        assert_eq!(lines.len(), 3);

        let stamps: Vec<&str> = lines.iter().map(|l| &l[..TIMESTAMP_LEN]).collect();
        assert!(stamps.iter().all(|s| *s == stamps[0]));

        let parts: Vec<&str> = lines
            .iter()
            .map(|l| l[TIMESTAMP_LEN + 1..].trim_end_matches('\n'))
            .collect();
        assert_eq!(parts, vec!["multi", "line", "message"]);
    }

    #[test]
    fn test_buffer_splits_back_into_lines() {
        let buffer = format_buffer("a\nb\n", fixed_instant());
        let split: Vec<&str> = buffer.split('\n').collect();

        // "a", "b" and an empty trailing segment, each on its own line,
        // plus the empty string after the final newline
        assert_eq!(split.len(), 4);
        assert!(split[0].ends_with(" a"));
        assert!(split[1].ends_with(" b"));
        assert_eq!(split[2], "2024-01-31T12:05:09.007Z ");
        assert_eq!(split[3], "");
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("plain")), "plain");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!(null)), "null");
        assert_eq!(value_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_render_text_with_params() {
        assert_eq!(render_text(&json!("message"), &[]), "message");
        assert_eq!(
            render_text(&json!("message"), &[json!("param1"), json!(2)]),
            "message param1 2"
        );
    }

    #[test]
    fn test_format_message_uses_now() {
        let buffer = format_message(&json!("hello"), &[]);
        assert!(buffer.ends_with(" hello\n"));
        assert!(is_timestamp(&buffer[..TIMESTAMP_LEN]));
    }
}
