//! Logging macros with `format!`-style messages.
//!
//! Each macro expands to exactly one logger call and evaluates to its
//! `Result<()>`. Metadata can be attached with a leading `metadata = expr;`.
//!
//! # Examples
//!
//! ```
//! use structured_logger::prelude::*;
//! use structured_logger::{info, warning};
//!
//! let sink = MemorySink::new();
//! let logger = create_structured_logger(&sink);
//!
//! info!(logger, "Server started")?;
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! let meta = Metadata::new().with_field("userId", "12345");
//! warning!(logger, metadata = meta; "Login attempt {} of {}", 3, 5)?;
//!
//! assert_eq!(sink.len(), 3);
//! # Ok::<(), structured_logger::LoggerError>(())
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use structured_logger::prelude::*;
/// # let logger = create_structured_logger(MemorySink::new());
/// use structured_logger::log;
/// log!(logger, Severity::Info, "Simple message")?;
/// log!(logger, Severity::Error, "Error code: {}", 500)?;
/// # Ok::<(), structured_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, metadata = $metadata:expr; $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $metadata)
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), None)
    };
}

/// Log an emergency-level message (system is unusable).
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emergency, $($arg)+)
    };
}

/// Log an alert-level message (action must be taken immediately).
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use structured_logger::prelude::*;
/// # let logger = create_structured_logger(MemorySink::new());
/// use structured_logger::error;
/// error!(logger, "Failed to connect to database")?;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok::<(), structured_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a notice-level message (normal but significant).
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}
