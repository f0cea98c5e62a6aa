use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Seconds between two polls of the player when nothing is configured
pub const DEFAULT_INTERVAL_SECS: u64 = 1;

/// General settings that apply to the whole process.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logging level; `RUST_LOG` takes precedence when set.
    pub log_level: LogLevel,

    /// Seconds between two updates of the module. Must be greater than zero.
    pub interval: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            interval: DEFAULT_INTERVAL_SECS,
        }
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only failures that stop the module from working.
    Error,

    /// Failures the module recovers from, such as a vanished player.
    Warn,

    /// Player selection and recovery (default level).
    #[default]
    Info,

    /// Every poll failure and dispatched command.
    Debug,

    /// Bus calls and their arguments.
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
