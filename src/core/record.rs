//! Structured log record handed to sinks

use super::metadata::Metadata;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully-formed structured log record
///
/// The message and metadata are carried exactly as the caller supplied them.
/// `metadata` is `None` when the caller omitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredLogRecord {
    /// Creation time
    pub timestamp: DateTime<Utc>,

    pub level: Severity,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl StructuredLogRecord {
    /// Create a record stamped with the current time
    pub fn new(level: Severity, message: impl Into<String>, metadata: Option<Metadata>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            metadata,
        }
    }

    /// Override the timestamp
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty JSON string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    ///
    /// Finite floats come back bit-for-bit. Non-finite floats were written as
    /// `null` and come back as [`FieldValue::Null`](super::metadata::FieldValue::Null).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::FieldValue;

    #[test]
    fn test_record_keeps_message_verbatim() {
        let record = StructuredLogRecord::new(Severity::Notice, "line one\nline two", None);

        assert_eq!(record.level, Severity::Notice);
        assert_eq!(record.message, "line one\nline two");
        assert!(record.metadata.is_none());
    }

    #[test]
    fn test_json_serialization() {
        let metadata = Metadata::new()
            .with_field("userId", "12345")
            .with_field("status", 500);

        let record = StructuredLogRecord::new(Severity::Error, "Database error", Some(metadata));

        let json = record.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["level"], "error");
        assert_eq!(parsed["message"], "Database error");
        assert_eq!(parsed["metadata"]["userId"], "12345");
        assert_eq!(parsed["metadata"]["status"], 500);
    }

    #[test]
    fn test_absent_metadata_is_not_serialized() {
        let record = StructuredLogRecord::new(Severity::Info, "no context", None);
        let json = record.to_json().unwrap();
        assert!(!json.contains("metadata"));
    }

    #[test]
    fn test_json_parse() {
        let json = r#"{"timestamp":"2025-01-08T10:30:45.123Z","level":"warning","message":"Disk at 91%"}"#;
        let record = StructuredLogRecord::from_json(json).unwrap();

        assert_eq!(record.level, Severity::Warning);
        assert_eq!(record.message, "Disk at 91%");
        assert!(record.metadata.is_none());
    }

    #[test]
    fn test_json_roundtrip_keeps_metadata_exact() {
        let metadata = Metadata::new()
            .with_field("offset", -420077966.91370356)
            .with_field("tiny", 5e-324)
            .with_field("ceiling", u64::MAX)
            .with_field(
                "request",
                Metadata::new()
                    .with_field("path", "/users")
                    .with_field("retries", vec![1, 2, 3]),
            );
        let record = StructuredLogRecord::new(Severity::Info, "exact", Some(metadata));

        let parsed = StructuredLogRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_non_finite_metadata_reads_back_as_null() {
        let record = StructuredLogRecord::new(
            Severity::Debug,
            "nan",
            Some(Metadata::new().with_field("v", f64::INFINITY)),
        );

        let parsed = StructuredLogRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(parsed.metadata.unwrap().get("v"), Some(&FieldValue::Null));
    }
}
