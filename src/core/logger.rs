//! Structured logger with syslog severity methods

use super::{
    error::Result, metadata::Metadata, record::StructuredLogRecord, severity::Severity,
    structured_log::StructuredLog,
};

/// Create a structured logger that forwards every call to `sink`
///
/// The sink is not touched until the first logging call.
///
/// # Example
///
/// ```
/// use structured_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = create_structured_logger(&sink);
///
/// logger.info("Test log message", Metadata::new().with_field("userId", "12345"))?;
/// logger.debug("No metadata", None)?;
///
/// assert_eq!(sink.len(), 2);
/// assert_eq!(sink.count_for(Severity::Info), 1);
/// # Ok::<(), structured_logger::LoggerError>(())
/// ```
#[must_use]
pub fn create_structured_logger<S: StructuredLog>(sink: S) -> StructuredLogger<S> {
    StructuredLogger::new(sink)
}

/// Logger exposing `log` plus one method per [`Severity`]
///
/// Each call builds exactly one [`StructuredLogRecord`] and hands it to the
/// sink. Sink errors are returned as-is.
#[derive(Debug, Clone)]
pub struct StructuredLogger<S> {
    sink: S,
}

impl<S: StructuredLog> StructuredLogger<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn log(
        &self,
        level: Severity,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        let record = StructuredLogRecord::new(level, data, metadata.into());
        self.sink.create_log(record)
    }

    #[inline]
    pub fn emergency(
        &self,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        self.log(Severity::Emergency, data, metadata)
    }

    #[inline]
    pub fn alert(
        &self,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        self.log(Severity::Alert, data, metadata)
    }

    #[inline]
    pub fn critical(
        &self,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        self.log(Severity::Critical, data, metadata)
    }

    #[inline]
    pub fn error(
        &self,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        self.log(Severity::Error, data, metadata)
    }

    #[inline]
    pub fn warning(
        &self,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        self.log(Severity::Warning, data, metadata)
    }

    #[inline]
    pub fn notice(
        &self,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        self.log(Severity::Notice, data, metadata)
    }

    #[inline]
    pub fn info(
        &self,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        self.log(Severity::Info, data, metadata)
    }

    #[inline]
    pub fn debug(
        &self,
        data: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> Result<()> {
        self.log(Severity::Debug, data, metadata)
    }
}

impl<S> StructuredLogger<S> {
    /// Borrow the underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the logger and return the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
