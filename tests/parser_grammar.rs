//! Parser Grammar Tests
//!
//! Tests for statement parsing:
//! - Table and WHERE extraction
//! - AND splitting and source order
//! - Value typing
//! - Error taxonomy
//! - Permissive vs strict handling of malformed fragments

use queryopt::parser::{parse_single_condition, ConditionParser, ParseError, ParseMode, Value};

// =============================================================================
// Statement Structure
// =============================================================================

/// Multiple AND conditions parse in source order.
#[test]
fn test_parse_multiple_conditions() {
    let parsed = queryopt::parse("SELECT * FROM users WHERE age > 25 AND country = 'US'").unwrap();

    assert_eq!(parsed.table_name, "users");
    assert_eq!(parsed.conditions.len(), 2);

    assert_eq!(parsed.conditions[0].column, "age");
    assert_eq!(parsed.conditions[0].operator, ">");
    assert_eq!(parsed.conditions[0].value, Value::Integer(25));

    assert_eq!(parsed.conditions[1].column, "country");
    assert_eq!(parsed.conditions[1].operator, "=");
    assert_eq!(parsed.conditions[1].value, Value::Text("US".into()));
}

/// Keywords are case-insensitive; identifiers keep their case.
#[test]
fn test_parse_case_insensitive_keywords() {
    let parsed = queryopt::parse("select * from Users where Age > 25 and country = 'US'").unwrap();

    assert_eq!(parsed.table_name, "Users");
    assert_eq!(parsed.conditions.len(), 2);
    assert_eq!(parsed.conditions[0].column, "Age");
}

/// Different operators are kept verbatim.
#[test]
fn test_parse_different_operators() {
    let parsed =
        queryopt::parse("SELECT * FROM products WHERE price >= 100 AND rating != 5 AND x <> 2")
            .unwrap();

    let ops: Vec<_> = parsed.conditions.iter().map(|c| c.operator.as_str()).collect();
    assert_eq!(ops, vec![">=", "!=", "<>"]);
}

/// AND inside a word does not split.
#[test]
fn test_and_requires_surrounding_whitespace() {
    let parsed = queryopt::parse("SELECT * FROM t WHERE brand = 'ANDROID' AND band = 3").unwrap();

    assert_eq!(parsed.conditions.len(), 2);
    assert_eq!(parsed.conditions[0].value, Value::Text("ANDROID".into()));
    assert_eq!(parsed.conditions[1].column, "band");
}

/// Extra whitespace around AND is absorbed by the split.
#[test]
fn test_and_with_extra_whitespace() {
    let parsed = queryopt::parse("SELECT * FROM t WHERE a = 1   and\tb = 2").unwrap();

    let texts: Vec<_> = parsed.conditions.iter().map(|c| c.original_text.as_str()).collect();
    assert_eq!(texts, vec!["a = 1", "b = 2"]);
}

/// Original query text is trimmed but otherwise preserved.
#[test]
fn test_original_query_preserved() {
    let query = "  SELECT *   FROM t WHERE a = 1  ";
    let parsed = queryopt::parse(query).unwrap();
    assert_eq!(parsed.original_query, query.trim());
}

// =============================================================================
// Value Typing
// =============================================================================

#[test]
fn test_value_types() {
    let parsed = queryopt::parse(
        "SELECT * FROM t WHERE a = 10 AND b = 2.5 AND c = abc AND d = '10' AND e = \"x y\"",
    )
    .unwrap();

    let values: Vec<_> = parsed.conditions.iter().map(|c| c.value.clone()).collect();
    assert_eq!(
        values,
        vec![
            Value::Integer(10),
            Value::Float(2.5),
            Value::Text("abc".into()),
            Value::Text("10".into()),
            Value::Text("x y".into()),
        ]
    );
}

/// Tokens with more than one `.` stay text.
#[test]
fn test_dotted_token_is_text() {
    let c = parse_single_condition("ip = 10.0.0.1").unwrap();
    assert_eq!(c.value, Value::Text("10.0.0.1".into()));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_invalid_select() {
    assert_eq!(queryopt::parse("INVALID QUERY"), Err(ParseError::InvalidSelect));
    assert_eq!(
        queryopt::parse("SELECT id FROM users WHERE id = 1"),
        Err(ParseError::InvalidSelect)
    );
    assert_eq!(queryopt::parse(""), Err(ParseError::InvalidSelect));
}

#[test]
fn test_missing_where() {
    assert_eq!(queryopt::parse("SELECT * FROM users"), Err(ParseError::MissingWhere));
    assert_eq!(queryopt::parse("SELECT * FROM users WHERE"), Err(ParseError::MissingWhere));
}

/// Error messages describe the expected shape.
#[test]
fn test_error_messages() {
    let err = queryopt::parse("SELECT * FROM users").unwrap_err();
    assert_eq!(err.to_string(), "Query must contain a WHERE clause");

    let err = queryopt::parse("nonsense").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid SELECT query format. Expected: SELECT * FROM table_name"
    );
}

// =============================================================================
// Malformed Fragments
// =============================================================================

/// Permissive mode silently drops fragments that do not match.
#[test]
fn test_permissive_drops_malformed_fragments() {
    let parsed = ConditionParser::new()
        .parse("SELECT * FROM t WHERE a = 1 AND b BETWEEN 1 AND 5 AND c = 'x'")
        .unwrap();

    let texts: Vec<_> = parsed.conditions.iter().map(|c| c.original_text.as_str()).collect();
    assert_eq!(texts, vec!["a = 1", "c = 'x'"]);
}

/// Permissive mode can yield zero conditions.
#[test]
fn test_permissive_all_fragments_malformed() {
    let parsed = ConditionParser::new().parse("SELECT * FROM t WHERE ???").unwrap();
    assert!(parsed.conditions.is_empty());

    let optimized = queryopt::optimize(&parsed);
    assert_eq!(optimized.optimization_summary, "No WHERE conditions - full table scan");
}

/// Strict mode fails the whole parse on the first malformed fragment.
#[test]
fn test_strict_rejects_malformed_fragments() {
    let parser = ConditionParser::with_mode(ParseMode::Strict);
    let err = parser
        .parse("SELECT * FROM t WHERE a = 1 AND b BETWEEN 1 AND 5")
        .unwrap_err();

    assert_eq!(
        err,
        ParseError::MalformedCondition {
            fragment: "b BETWEEN 1".into()
        }
    );
    assert_eq!(err.code(), "QOPT_PARSE_MALFORMED_CONDITION");
}

/// Strict mode accepts well-formed input unchanged.
#[test]
fn test_strict_accepts_well_formed() {
    let query = "SELECT * FROM t WHERE a = 1 AND name LIKE 'J%'";
    let strict = ConditionParser::strict().parse(query).unwrap();
    let permissive = ConditionParser::new().parse(query).unwrap();
    assert_eq!(strict, permissive);
}
