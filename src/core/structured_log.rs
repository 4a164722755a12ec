//! Sink capability consumed by the structured logger

use super::{error::Result, record::StructuredLogRecord};
use std::sync::Arc;

/// A destination able to record a fully-formed structured log record
///
/// Implementations decide how records are formatted, filtered or stored.
/// Errors returned here reach the caller of the logging method unchanged.
pub trait StructuredLog: Send + Sync {
    fn create_log(&self, record: StructuredLogRecord) -> Result<()>;
}

impl<T: StructuredLog + ?Sized> StructuredLog for &T {
    fn create_log(&self, record: StructuredLogRecord) -> Result<()> {
        (**self).create_log(record)
    }
}

impl<T: StructuredLog + ?Sized> StructuredLog for Box<T> {
    fn create_log(&self, record: StructuredLogRecord) -> Result<()> {
        (**self).create_log(record)
    }
}

impl<T: StructuredLog + ?Sized> StructuredLog for Arc<T> {
    fn create_log(&self, record: StructuredLogRecord) -> Result<()> {
        (**self).create_log(record)
    }
}
