//! Parsed query structures
//!
//! Conditions are plain immutable aggregates. Nothing in this module
//! knows about scoring or planning.

use std::fmt;

use serde::Serialize;

/// Literal value on the right-hand side of a condition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Unquoted token without a `.`
    Integer(i64),
    /// Unquoted token with a single `.` that parses as a float
    Float(f64),
    /// Quoted token, or any unquoted token that is not numeric
    Text(String),
}

impl Value {
    /// Infers the value type of an unquoted token.
    ///
    /// No `.` means integer, a `.` means float; anything that fails to
    /// parse stays text.
    pub fn infer(token: &str) -> Self {
        if token.contains('.') {
            token
                .parse::<f64>()
                .map(Value::Float)
                .unwrap_or_else(|_| Value::Text(token.to_string()))
        } else {
            token
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or_else(|_| Value::Text(token.to_string()))
        }
    }

    /// Quoted tokens are always text
    pub fn quoted(token: impl Into<String>) -> Self {
        Value::Text(token.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            // Integral floats keep their fractional marker so `25.0` never
            // reads as the integer `25`.
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// One atomic `column operator value` predicate from a WHERE clause
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    /// Column name, case preserved
    pub column: String,
    /// Operator as written (keyword operators are upper-cased)
    pub operator: String,
    /// Typed literal
    pub value: Value,
    /// Exact source text of the fragment
    pub original_text: String,
}

impl Condition {
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
            original_text: original_text.into(),
        }
    }

    /// Returns true for `=` and `==`
    pub fn is_equality(&self) -> bool {
        matches!(self.operator.as_str(), "=" | "==")
    }

    /// Returns true for `>`, `>=`, `<` and `<=`
    pub fn is_range(&self) -> bool {
        matches!(self.operator.as_str(), ">" | ">=" | "<" | "<=")
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original_text)
    }
}

/// Result of parsing one full statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuery {
    /// Identifier following `FROM`
    pub table_name: String,
    /// Conditions in source order
    pub conditions: Vec<Condition>,
    /// Trimmed input text
    pub original_query: String,
}

impl ParsedQuery {
    pub fn new(
        table_name: impl Into<String>,
        conditions: Vec<Condition>,
        original_query: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            conditions,
            original_query: original_query.into(),
        }
    }

    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }
}
