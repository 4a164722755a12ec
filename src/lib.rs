//! # Structured Logger
//!
//! A structured logger exposing the eight syslog severities as methods and
//! forwarding each call, as one fully-formed record, to a pluggable sink.
//!
//! ## Features
//!
//! - **Syslog Severities**: `emergency` through `debug`, plus a generic `log`
//! - **Pluggable Sinks**: anything implementing [`StructuredLog`]
//! - **Fail Loud**: sink errors are returned to the caller untouched
//! - **Thread Safe**: loggers are `Send + Sync` and can be shared behind `Arc`
//!
//! ```
//! use structured_logger::prelude::*;
//!
//! let logger = create_structured_logger(MemorySink::new());
//! logger.info("Test log message", Metadata::new().with_field("userId", "12345"))?;
//! logger.debug("Cache warmed", None)?;
//! # Ok::<(), structured_logger::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::{ConsoleSink, ConsoleSinkConfig};
    pub use crate::sinks::{FnSink, MemorySink};
    pub use crate::core::{
        create_structured_logger, FieldValue, LoggerError, Metadata, OutputFormat, Result,
        Severity, StructuredLog, StructuredLogBuilder, StructuredLogRecord, StructuredLogger,
        TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use crate::sinks::{ConsoleSink, ConsoleSinkConfig};
pub use crate::sinks::{FnSink, MemorySink};
pub use crate::core::{
    create_structured_logger, FieldValue, LoggerError, Metadata, OutputFormat, Result, Severity,
    StructuredLog, StructuredLogBuilder, StructuredLogRecord, StructuredLogger, TimestampFormat,
};
