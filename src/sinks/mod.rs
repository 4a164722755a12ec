//! Sink implementations

#[cfg(feature = "console")]
pub mod console;
pub mod function;
pub mod memory;

#[cfg(feature = "console")]
pub use console::{ConsoleSink, ConsoleSinkConfig};
pub use function::FnSink;
pub use memory::MemorySink;

pub use crate::core::StructuredLog;
