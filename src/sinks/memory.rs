//! In-memory sink that records every record it receives

use crate::core::{LoggerError, Result, Severity, StructuredLog, StructuredLogRecord};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sink that keeps records in memory for later inspection
///
/// Useful as a test double: it counts every `create_log` call and can be
/// configured to fail each one.
///
/// # Example
///
/// ```
/// use structured_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = create_structured_logger(&sink);
///
/// logger.error("Test log message", None)?;
///
/// assert_eq!(sink.count_for(Severity::Error), 1);
/// assert_eq!(sink.count_for(Severity::Debug), 0);
/// # Ok::<(), structured_logger::LoggerError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<StructuredLogRecord>>,
    attempts: AtomicUsize,
    failure: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink whose every `create_log` call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Snapshot of the stored records, oldest first
    pub fn records(&self) -> Vec<StructuredLogRecord> {
        self.records.lock().clone()
    }

    pub fn last(&self) -> Option<StructuredLogRecord> {
        self.records.lock().last().cloned()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Number of stored records at exactly `level`
    pub fn count_for(&self, level: Severity) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|record| record.level == level)
            .count()
    }

    /// Number of `create_log` calls, including failed ones
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.records.lock().clear();
        self.attempts.store(0, Ordering::Relaxed);
    }
}

impl StructuredLog for MemorySink {
    fn create_log(&self, record: StructuredLogRecord) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::Relaxed);

        if let Some(ref message) = self.failure {
            return Err(LoggerError::sink("memory", message.clone()));
        }

        self.records.lock().push(record);
        Ok(())
    }
}
