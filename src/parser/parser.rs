//! WHERE-clause parser
//!
//! Grammar (keywords case-insensitive):
//!
//! ```text
//! SELECT * FROM <identifier> WHERE <condition> (AND <condition>)*
//! <condition> := <identifier> <op> <value>
//! <op>        := run of = < > !  |  LIKE  |  ILIKE
//! <value>     := 'text' | "text" | bare-token
//! ```
//!
//! The parser holds no state between calls.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::ast::{Condition, ParsedQuery, Value};
use super::errors::{ParseError, ParseResult};
use crate::observability::Event;

static SELECT_RE: OnceLock<Regex> = OnceLock::new();
static WHERE_RE: OnceLock<Regex> = OnceLock::new();
static AND_RE: OnceLock<Regex> = OnceLock::new();
static CONDITION_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern must compile"))
}

fn select_re() -> &'static Regex {
    compiled(&SELECT_RE, r"(?i)SELECT\s+\*\s+FROM\s+(\w+)")
}

fn where_re() -> &'static Regex {
    compiled(&WHERE_RE, r"(?i)\bWHERE\s+(.+)")
}

fn and_re() -> &'static Regex {
    compiled(&AND_RE, r"(?i)\s+AND\s+")
}

fn condition_re() -> &'static Regex {
    compiled(
        &CONDITION_RE,
        r#"^(\w+)(?:\s*([=<>!]+)|\s+((?i:I?LIKE))\b)\s*(?:'([^']*)'|"([^"]*)"|([^'"\s]+))"#,
    )
}

/// How the parser treats a WHERE fragment that does not match the
/// condition grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Drop the fragment and keep parsing
    #[default]
    Permissive,
    /// Fail the whole parse with `MalformedCondition`
    Strict,
}

/// Parser for `SELECT * FROM <table> WHERE ...` statements
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionParser {
    mode: ParseMode,
}

impl ConditionParser {
    /// Creates a permissive parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that rejects malformed conditions
    pub fn strict() -> Self {
        Self::with_mode(ParseMode::Strict)
    }

    pub fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Parses a full statement.
    ///
    /// Table extraction happens before WHERE extraction, so an input that
    /// lacks both reports `InvalidSelect`.
    pub fn parse(&self, query: &str) -> ParseResult<ParsedQuery> {
        let query = query.trim();
        tracing::trace!(event = %Event::ParseStart, query, "parsing query");

        let table_name = match select_re().captures(query) {
            Some(caps) => caps[1].to_string(),
            None => {
                tracing::warn!(
                    event = %Event::ParseRejected,
                    code = ParseError::InvalidSelect.code(),
                    query
                );
                return Err(ParseError::InvalidSelect);
            }
        };

        let where_clause = match where_re().captures(query) {
            Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
            None => {
                tracing::warn!(
                    event = %Event::ParseRejected,
                    code = ParseError::MissingWhere.code(),
                    query
                );
                return Err(ParseError::MissingWhere);
            }
        };

        let conditions = self.parse_conditions(where_clause)?;

        tracing::debug!(
            event = %Event::ParseComplete,
            table = %table_name,
            conditions = conditions.len(),
            "query parsed"
        );

        Ok(ParsedQuery::new(table_name, conditions, query))
    }

    /// Splits a WHERE clause on `AND` and parses each fragment in order
    pub fn parse_conditions(&self, where_clause: &str) -> ParseResult<Vec<Condition>> {
        let mut conditions = Vec::new();

        for fragment in and_re().split(where_clause) {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }

            match parse_single_condition(fragment) {
                Some(condition) => conditions.push(condition),
                None => match self.mode {
                    ParseMode::Permissive => {
                        tracing::warn!(
                            event = %Event::ConditionDropped,
                            fragment,
                            "dropping malformed condition"
                        );
                    }
                    ParseMode::Strict => {
                        let err = ParseError::MalformedCondition {
                            fragment: fragment.to_string(),
                        };
                        tracing::warn!(event = %Event::ParseRejected, code = err.code(), fragment);
                        return Err(err);
                    }
                },
            }
        }

        Ok(conditions)
    }
}

/// Parses one `column op value` fragment.
///
/// Returns `None` when the fragment does not match the condition grammar.
/// Anything after the value is kept in `original_text` but otherwise ignored.
pub fn parse_single_condition(fragment: &str) -> Option<Condition> {
    let fragment = fragment.trim();
    let caps = condition_re().captures(fragment)?;

    let column = caps.get(1)?.as_str();
    let operator = match (caps.get(2), caps.get(3)) {
        (Some(symbolic), _) => symbolic.as_str().to_string(),
        (None, Some(keyword)) => keyword.as_str().to_ascii_uppercase(),
        (None, None) => return None,
    };
    let value = extract_value(&caps)?;

    Some(Condition {
        column: column.to_string(),
        operator,
        value,
        original_text: fragment.to_string(),
    })
}

fn extract_value(caps: &Captures<'_>) -> Option<Value> {
    if let Some(single) = caps.get(4) {
        return Some(Value::quoted(single.as_str()));
    }
    if let Some(double) = caps.get(5) {
        return Some(Value::quoted(double.as_str()));
    }
    caps.get(6).map(|bare| Value::infer(bare.as_str()))
}
