//! Configuration file
//!
//! All fields are optional. A missing `--config` flag means defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::LogLevel;
use crate::parser::ParseMode;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level when `RUST_LOG` is unset (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines (default false)
    #[serde(default)]
    pub log_json: bool,

    /// "text" or "json" (default "text")
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Reject malformed conditions instead of dropping them (default false)
    #[serde(default)]
    pub strict_conditions: bool,

    /// Queries run by `queryopt demo`
    #[serde(default = "default_demo_queries")]
    pub demo_queries: Vec<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_output_format() -> String {
    "text".to_string()
}
fn default_demo_queries() -> Vec<String> {
    [
        "SELECT * FROM users WHERE age > 25 AND country = 'US'",
        "SELECT * FROM products WHERE category = 'electronics' AND price < 1000 AND rating > 4",
        "SELECT * FROM employees WHERE department = 'IT' AND salary > 50000 AND status = 'active'",
        "SELECT * FROM orders WHERE country = 'US' AND age > 18 AND status = 'completed'",
        "SELECT * FROM customers WHERE gender = 'M' AND country = 'Canada' AND age > 30",
    ]
    .iter()
    .map(|q| q.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            output_format: default_output_format(),
            strict_conditions: false,
            demo_queries: default_demo_queries(),
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from the given path, or fall back to defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.log_level
            .parse::<LogLevel>()
            .map_err(CliError::config_error)?;

        if self.output_format != "text" && self.output_format != "json" {
            return Err(CliError::config_error(format!(
                "Invalid output_format: '{}'. Expected 'text' or 'json'.",
                self.output_format
            )));
        }

        if let Some(i) = self.demo_queries.iter().position(|q| q.trim().is_empty()) {
            return Err(CliError::config_error(format!(
                "demo_queries[{}] must not be empty",
                i
            )));
        }

        Ok(())
    }

    /// Applies command-line overrides. Flags can only switch features on.
    pub fn with_overrides(mut self, strict: bool, json: bool) -> Self {
        if strict {
            self.strict_conditions = true;
        }
        if json {
            self.output_format = "json".to_string();
        }
        self
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level.parse().unwrap_or(LogLevel::Warn)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.output_format == "json" {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn parse_mode(&self) -> ParseMode {
        if self.strict_conditions {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        }
    }
}
