//! Parser error types
//!
//! Error codes:
//! - QOPT_PARSE_INVALID_SELECT
//! - QOPT_PARSE_MISSING_WHERE
//! - QOPT_PARSE_MALFORMED_CONDITION (strict mode only)

use thiserror::Error;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors surfaced by the condition parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `SELECT * FROM <table>` prefix anywhere in the input
    #[error("Invalid SELECT query format. Expected: SELECT * FROM table_name")]
    InvalidSelect,

    /// Table found but no WHERE clause follows
    #[error("Query must contain a WHERE clause")]
    MissingWhere,

    /// A WHERE fragment did not match `<column> <op> <value>`
    #[error("Malformed condition: '{fragment}'")]
    MalformedCondition { fragment: String },
}

impl ParseError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidSelect => "QOPT_PARSE_INVALID_SELECT",
            ParseError::MissingWhere => "QOPT_PARSE_MISSING_WHERE",
            ParseError::MalformedCondition { .. } => "QOPT_PARSE_MALFORMED_CONDITION",
        }
    }

    /// Returns the offending fragment, if any
    pub fn fragment(&self) -> Option<&str> {
        match self {
            ParseError::MalformedCondition { fragment } => Some(fragment),
            _ => None,
        }
    }
}
