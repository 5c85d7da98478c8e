//! Errors surfaced by the `queryopt` binary
//!
//! Every failure carries a stable `QOPT_CLI_*` code. Parse failures keep the
//! underlying `QOPT_PARSE_*` code in the message.

use std::io;

use thiserror::Error;

use crate::parser::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Unreadable or invalid config file
    ConfigError,
    /// stdin, stdout or batch file failure
    IoError,
    /// Query rejected by the parser
    ParseError,
}

impl CliErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigError => "QOPT_CLI_CONFIG_ERROR",
            Self::IoError => "QOPT_CLI_IO_ERROR",
            Self::ParseError => "QOPT_CLI_PARSE_ERROR",
        }
    }
}

/// Failure of a CLI command, rendered as `CODE: message`
#[derive(Debug, Error)]
#[error("{}: {message}", .code.as_str())]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, message)
    }

    pub fn io_error(message: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, message)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::io_error(format!("Failed to encode JSON output: {}", err))
    }
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        Self::new(CliErrorCode::ParseError, format!("[{}] {}", err.code(), err))
    }
}

pub type CliResult<T> = Result<T, CliError>;
