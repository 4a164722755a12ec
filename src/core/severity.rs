//! Syslog severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Syslog severity, ordered from most severe (`Emergency`, code 0) to least
/// severe (`Debug`, code 7).
///
/// `Ord` follows the numeric code, so `Severity::Emergency < Severity::Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    #[default]
    Info = 6,
    Debug = 7,
}

impl Severity {
    /// Every severity, most severe first
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// Numeric syslog code (0-7)
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Lowercase name, identical to the logger method for this severity
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// Uppercase label used by text output
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Emergency => "EMERGENCY",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Returns true if `self` is as severe as `threshold` or more
    pub fn is_at_least(&self, threshold: Severity) -> bool {
        *self <= threshold
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Emergency => BrightMagenta,
            Severity::Alert => Magenta,
            Severity::Critical => BrightRed,
            Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Notice => Cyan,
            Severity::Info => Green,
            Severity::Debug => BrightBlack,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emergency" | "emerg" | "0" => Ok(Severity::Emergency),
            "alert" | "1" => Ok(Severity::Alert),
            "critical" | "crit" | "2" => Ok(Severity::Critical),
            "error" | "err" | "3" => Ok(Severity::Error),
            "warning" | "warn" | "4" => Ok(Severity::Warning),
            "notice" | "5" => Ok(Severity::Notice),
            "info" | "6" => Ok(Severity::Info),
            "debug" | "7" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
