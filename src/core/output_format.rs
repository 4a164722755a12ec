//! Output formats for rendering records
//!
//! - Text: Human-readable line (default)
//! - Json: One JSON object per record
//! - Logfmt: key=value pairs

use super::metadata::FieldValue;
use super::record::StructuredLogRecord;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Stands in for an empty metadata key in logfmt output
const EMPTY_LOGFMT_KEY: &str = "_";

/// Output format for rendered records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[2025-01-08T10:30:45.123Z] [INFO     ] Request processed userId=12345`
    #[default]
    Text,

    /// `{"timestamp":"2025-01-08T10:30:45.123Z","level":"info","message":"Request processed","userId":"12345"}`
    Json,

    /// `timestamp=2025-01-08T10:30:45.123Z level=info message="Request processed" userId="12345"`
    Logfmt,
}

impl OutputFormat {
    pub fn format(&self, record: &StructuredLogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => format_text(record, timestamp_format),
            OutputFormat::Json => format_json(record, timestamp_format),
            OutputFormat::Logfmt => format_logfmt(record, timestamp_format),
        }
    }
}

/// Render the text layout with an already-decorated level label
///
/// Shared with the console sink, which colors the label before calling this.
/// Line breaks in the message are escaped so one record is one line.
pub(crate) fn text_line(
    record: &StructuredLogRecord,
    timestamp_format: &TimestampFormat,
    level_label: &str,
) -> String {
    let base = format!(
        "[{}] [{}] {}",
        timestamp_format.format(&record.timestamp),
        level_label,
        escape_line_breaks(&record.message)
    );

    match record.metadata {
        Some(ref metadata) if !metadata.is_empty() => {
            format!("{} {}", base, metadata.format_fields())
        }
        _ => base,
    }
}

fn escape_line_breaks(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn format_text(record: &StructuredLogRecord, timestamp_format: &TimestampFormat) -> String {
    text_line(record, timestamp_format, &format!("{:9}", record.level.label()))
}

fn format_json(record: &StructuredLogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut json_obj = serde_json::Map::new();

    json_obj.insert(
        "timestamp".to_string(),
        timestamp_format.to_json_value(&record.timestamp),
    );
    json_obj.insert(
        "level".to_string(),
        serde_json::Value::String(record.level.to_str().to_string()),
    );
    json_obj.insert(
        "message".to_string(),
        serde_json::Value::String(record.message.clone()),
    );

    // Metadata is flattened; reserved keys win over colliding fields
    if let Some(ref metadata) = record.metadata {
        for (key, value) in metadata.fields() {
            json_obj
                .entry(key.clone())
                .or_insert_with(|| value.to_json_value());
        }
    }

    serde_json::Value::Object(json_obj).to_string()
}

fn format_logfmt(record: &StructuredLogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut parts = vec![
        format!(
            "timestamp={}",
            escape_logfmt_value(&timestamp_format.format(&record.timestamp))
        ),
        format!("level={}", record.level.to_str()),
        format!("message={}", quote_logfmt_value(&record.message)),
    ];

    if let Some(ref metadata) = record.metadata {
        for (key, value) in metadata.fields() {
            let formatted_value = match value {
                FieldValue::String(s) => quote_logfmt_value(s),
                FieldValue::Array(_) | FieldValue::Object(_) => {
                    quote_logfmt_value(&value.to_string())
                }
                other => other.to_string(),
            };
            parts.push(format!("{}={}", escape_logfmt_key(key), formatted_value));
        }
    }

    parts.join(" ")
}

/// Replace characters logfmt keys do not allow with `_`
fn escape_logfmt_key(key: &str) -> String {
    if key.is_empty() {
        return EMPTY_LOGFMT_KEY.to_string();
    }

    key.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn escape_logfmt_value(value: &str) -> String {
    if value.contains(' ') || value.contains('"') || value.contains('=') {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!(
        "\"{}\"",
        value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Metadata, Severity};

    fn record(level: Severity, message: &str, metadata: Option<Metadata>) -> StructuredLogRecord {
        StructuredLogRecord::new(level, message, metadata)
    }

    #[test]
    fn test_text_format() {
        let entry = record(Severity::Info, "Test message", None);
        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("[INFO     ]"));
        assert!(result.ends_with("Test message"));
    }

    #[test]
    fn test_text_format_with_metadata() {
        let metadata = Metadata::new()
            .with_field("userId", "12345")
            .with_field("action", "login");
        let entry = record(Severity::Notice, "User logged in", Some(metadata));

        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("User logged in"));
        assert!(result.ends_with("action=login userId=12345"));
    }

    #[test]
    fn test_json_format() {
        let entry = record(Severity::Critical, "Error occurred", None);
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::Iso8601);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "critical");
        assert_eq!(parsed["message"], "Error occurred");
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_json_format_with_metadata() {
        let metadata = Metadata::new()
            .with_field("requestId", "abc-123")
            .with_field("latency_ms", 42)
            .with_field("level", "spoofed");
        let entry = record(Severity::Info, "Request completed", Some(metadata));

        let result = OutputFormat::Json.format(&entry, &TimestampFormat::UnixMillis);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["requestId"], "abc-123");
        assert_eq!(parsed["latency_ms"], 42);
        assert_eq!(parsed["level"], "info");
        assert!(parsed["timestamp"].is_number());
    }

    #[test]
    fn test_logfmt_format() {
        let entry = record(Severity::Warning, "Warning message", None);
        let result = OutputFormat::Logfmt.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("level=warning"));
        assert!(result.contains("message=\"Warning message\""));
    }

    #[test]
    fn test_logfmt_escapes_values() {
        let metadata = Metadata::new()
            .with_field("query", "SELECT * FROM users WHERE id=1")
            .with_field("rows", 5);
        let entry = record(Severity::Debug, "two\nlines", Some(metadata));

        let result = OutputFormat::Logfmt.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("message=\"two\\nlines\""));
        assert!(result.contains("query=\"SELECT * FROM users WHERE id=1\""));
        assert!(result.contains("rows=5"));
    }

    #[test]
    fn test_logfmt_keys_are_sanitized() {
        let metadata = Metadata::new()
            .with_field("user.id", "42")
            .with_field("has space", 1)
            .with_field("!!", 2)
            .with_field("", 3);
        let entry = record(Severity::Info, "keys", Some(metadata));

        let result = OutputFormat::Logfmt.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains(" user.id=\"42\""));
        assert!(result.contains(" has_space=1"));
        assert!(result.contains(" __=2"));
        assert!(result.contains(" _=3"));
        assert!(!result.contains(" ="));
    }

    #[test]
    fn test_logfmt_nested_values_are_quoted_json() {
        let metadata = Metadata::new().with_field("tags", vec!["a", "b"]);
        let entry = record(Severity::Info, "nested", Some(metadata));

        let result = OutputFormat::Logfmt.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.ends_with(r#"tags="[\"a\",\"b\"]""#));
    }

    #[test]
    fn test_json_format_nested_metadata() {
        let metadata = Metadata::new().with_field(
            "request",
            Metadata::new().with_field("path", "/users").with_field("ids", vec![1, 2]),
        );
        let entry = record(Severity::Info, "nested", Some(metadata));

        let result = OutputFormat::Json.format(&entry, &TimestampFormat::Iso8601);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["request"]["path"], "/users");
        assert_eq!(parsed["request"]["ids"][1], 2);
    }

    #[test]
    fn test_text_format_stays_on_one_line() {
        let metadata = Metadata::new()
            .with_field("query", "id=1 AND name='x'")
            .with_field("trace", "a\nb");
        let entry = record(Severity::Error, "first\nsecond", Some(metadata.clone()));

        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(!result.contains('\n'));
        assert!(result.contains("first\\nsecond"));
        assert!(result.ends_with(r#"query="id=1 AND name='x'" trace="a\nb""#));
        // Rendering leaves the record itself untouched
        assert_eq!(entry.message, "first\nsecond");
        assert_eq!(entry.metadata, Some(metadata));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
