//! Fluent construction of a single structured log call
//!
//! Provides a builder pattern for attaching metadata field by field before
//! handing the record to the logger.

use super::error::Result;
use super::logger::StructuredLogger;
use super::metadata::{FieldValue, Metadata};
use super::severity::Severity;
use super::structured_log::StructuredLog;

/// Builder for one structured log call
///
/// # Example
///
/// ```
/// use structured_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = create_structured_logger(&sink);
///
/// StructuredLogBuilder::new(&logger, Severity::Notice)
///     .message("Request processed")
///     .field("userId", "12345")
///     .field("latency_ms", 42.5)
///     .log()?;
///
/// assert_eq!(sink.count_for(Severity::Notice), 1);
/// # Ok::<(), structured_logger::LoggerError>(())
/// ```
pub struct StructuredLogBuilder<'a, S> {
    logger: &'a StructuredLogger<S>,
    level: Severity,
    message: String,
    metadata: Option<Metadata>,
}

impl<'a, S: StructuredLog> StructuredLogBuilder<'a, S> {
    pub fn new(logger: &'a StructuredLogger<S>, level: Severity) -> Self {
        Self {
            logger,
            level,
            message: String::new(),
            metadata: None,
        }
    }

    /// Set the log message
    #[must_use]
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    /// Add a metadata field
    #[must_use]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .add_field(key, value);
        self
    }

    /// Add every field of an existing metadata map
    #[must_use]
    pub fn fields(mut self, metadata: Metadata) -> Self {
        let target = self.metadata.get_or_insert_with(Metadata::new);
        for (key, value) in metadata.fields() {
            target.add_field(key.clone(), value.clone());
        }
        self
    }

    /// Send the record to the sink
    ///
    /// Metadata stays absent unless at least one field was added.
    pub fn log(self) -> Result<()> {
        self.logger.log(self.level, self.message, self.metadata)
    }
}
