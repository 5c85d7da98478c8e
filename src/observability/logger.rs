//! Log subscriber setup
//!
//! Logs go to stderr so stdout carries only results. `RUST_LOG` wins over
//! the configured level when set.

use std::fmt;
use std::io;
use std::str::FromStr;

use tracing_subscriber::{fmt as tfmt, prelude::*, EnvFilter, Registry};

/// Log level accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Default filter directive when `RUST_LOG` is unset
    pub fn directive(&self) -> String {
        format!("queryopt={},warn", self.as_str())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("Invalid log level: '{}'", other)),
        }
    }
}

/// Installs the global subscriber.
///
/// Returns false when a subscriber was already installed; logging setup
/// never aborts the program.
pub fn init_logging(level: LogLevel, json_output: bool) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    if json_output {
        let fmt_layer = tfmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr);
        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    } else {
        let fmt_layer = tfmt::layer()
            .with_target(false)
            .with_writer(io::stderr);
        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    }
}
