//! Core logger types and traits

pub mod builder;
pub mod error;
pub mod logger;
pub mod metadata;
pub mod output_format;
pub mod record;
pub mod severity;
pub mod structured_log;
pub mod timestamp;

pub use builder::StructuredLogBuilder;
pub use error::{LoggerError, Result};
pub use logger::{create_structured_logger, StructuredLogger};
pub use metadata::{FieldValue, Metadata};
pub use output_format::OutputFormat;
pub use record::StructuredLogRecord;
pub use severity::Severity;
pub use structured_log::StructuredLog;
pub use timestamp::TimestampFormat;
