//! Closure-backed sink

use crate::core::{Result, StructuredLog, StructuredLogRecord};
use std::fmt;

/// Adapts a closure into a [`StructuredLog`] sink
///
/// # Example
///
/// ```
/// use structured_logger::prelude::*;
///
/// let logger = create_structured_logger(FnSink::new(|record: StructuredLogRecord| {
///     assert_eq!(record.level, Severity::Warning);
///     Ok(())
/// }));
///
/// logger.warning("Disk at 91%", None)?;
/// # Ok::<(), structured_logger::LoggerError>(())
/// ```
pub struct FnSink<F> {
    f: F,
}

impl<F> FnSink<F>
where
    F: Fn(StructuredLogRecord) -> Result<()> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> StructuredLog for FnSink<F>
where
    F: Fn(StructuredLogRecord) -> Result<()> + Send + Sync,
{
    fn create_log(&self, record: StructuredLogRecord) -> Result<()> {
        (self.f)(record)
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}
