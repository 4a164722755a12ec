//! Console sink implementation

use crate::core::output_format::text_line;
use crate::core::{
    LoggerError, OutputFormat, Result, Severity, StructuredLog, StructuredLogRecord,
    TimestampFormat,
};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Configuration for [`ConsoleSink`]
///
/// Every field has a default, so a partial document is enough:
///
/// ```
/// use structured_logger::sinks::ConsoleSinkConfig;
/// use structured_logger::{OutputFormat, Severity};
///
/// let config = ConsoleSinkConfig::from_json(r#"{"min_severity": "notice", "output_format": "json"}"#)?;
/// assert_eq!(config.min_severity, Severity::Notice);
/// assert_eq!(config.output_format, OutputFormat::Json);
/// assert!(config.use_colors);
/// # Ok::<(), structured_logger::LoggerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSinkConfig {
    /// Least severe level still printed
    pub min_severity: Severity,
    pub use_colors: bool,
    pub output_format: OutputFormat,
    pub timestamp_format: TimestampFormat,
}

impl Default for ConsoleSinkConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Debug,
            use_colors: true,
            output_format: OutputFormat::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl ConsoleSinkConfig {
    pub fn validate(&self) -> Result<()> {
        self.timestamp_format.validate().map_err(|e| match e {
            LoggerError::InvalidConfiguration { message, .. } => {
                LoggerError::config("ConsoleSink", message)
            }
            other => other,
        })
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Prints records to the terminal
///
/// `emergency` through `error` go to stderr, everything else to stdout.
/// Records less severe than `min_severity` are skipped. Write failures are
/// returned to the caller.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    config: ConsoleSinkConfig,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            config: ConsoleSinkConfig {
                use_colors,
                ..ConsoleSinkConfig::default()
            },
        }
    }

    pub fn from_config(config: ConsoleSinkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.config.min_severity = severity;
        self
    }

    /// Set the output format for this sink
    ///
    /// # Example
    ///
    /// ```
    /// use structured_logger::sinks::ConsoleSink;
    /// use structured_logger::OutputFormat;
    ///
    /// let sink = ConsoleSink::new().with_output_format(OutputFormat::Logfmt);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Set the timestamp format, rejecting custom patterns chrono cannot render
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Result<Self> {
        self.config.timestamp_format = format;
        self.config.validate()?;
        Ok(self)
    }

    pub fn config(&self) -> &ConsoleSinkConfig {
        &self.config
    }

    /// Render a record as the sink would print it
    pub fn render(&self, record: &StructuredLogRecord) -> String {
        match self.config.output_format {
            OutputFormat::Text => {
                let padded = format!("{:9}", record.level.label());
                let label = if self.config.use_colors {
                    padded.color(record.level.color_code()).to_string()
                } else {
                    padded
                };
                text_line(record, &self.config.timestamp_format, &label)
            }
            OutputFormat::Json | OutputFormat::Logfmt => self
                .config
                .output_format
                .format(record, &self.config.timestamp_format),
        }
    }
}

impl StructuredLog for ConsoleSink {
    fn create_log(&self, record: StructuredLogRecord) -> Result<()> {
        if !record.level.is_at_least(self.config.min_severity) {
            return Ok(());
        }

        let line = self.render(&record);

        if record.level.is_at_least(Severity::Error) {
            let mut stderr = std::io::stderr().lock();
            writeln!(stderr, "{}", line)
                .map_err(|e| LoggerError::io_operation("writing to stderr", "console write failed", e))
        } else {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", line)
                .map_err(|e| LoggerError::io_operation("writing to stdout", "console write failed", e))
        }
    }
}
