//! Condition parser for queryopt
//!
//! Turns `SELECT * FROM <table> WHERE c1 AND c2 ...` into a typed
//! `ParsedQuery`.
//!
//! # Value typing
//!
//! - Quoted tokens are always text
//! - Unquoted tokens without `.` are integers when they parse
//! - Unquoted tokens with `.` are floats when they parse
//! - Everything else is text

mod ast;
mod errors;
mod parser;

pub use ast::{Condition, ParsedQuery, Value};
pub use errors::{ParseError, ParseResult};
pub use parser::{parse_single_condition, ConditionParser, ParseMode};
