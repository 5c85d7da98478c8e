//! Static selectivity tables
//!
//! Each table is a total function: unknown keys map to a default. All
//! factors lie in (0, 1].

/// Operator class used for scoring and reasoning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    Equality,
    Range,
    Inequality,
    Pattern,
    Unknown,
}

impl OperatorClass {
    /// Classifies an operator. Keyword operators match case-insensitively.
    pub fn of(operator: &str) -> Self {
        match operator {
            "=" | "==" => OperatorClass::Equality,
            ">" | ">=" | "<" | "<=" => OperatorClass::Range,
            "!=" | "<>" => OperatorClass::Inequality,
            op if op.eq_ignore_ascii_case("LIKE") || op.eq_ignore_ascii_case("ILIKE") => {
                OperatorClass::Pattern
            }
            _ => OperatorClass::Unknown,
        }
    }

    /// Base selectivity of the class
    pub fn base_score(&self) -> f64 {
        match self {
            OperatorClass::Equality => 0.1,
            OperatorClass::Range => 0.3,
            OperatorClass::Inequality => 0.5,
            OperatorClass::Pattern => 0.7,
            OperatorClass::Unknown => DEFAULT_OPERATOR_SCORE,
        }
    }
}

pub const DEFAULT_OPERATOR_SCORE: f64 = 0.5;
pub const DEFAULT_COLUMN_MODIFIER: f64 = 0.3;
pub const DEFAULT_VALUE_MODIFIER: f64 = 1.0;

/// Operator base score
pub fn operator_base(operator: &str) -> f64 {
    OperatorClass::of(operator).base_score()
}

/// Column cardinality modifier, looked up case-insensitively
pub fn column_modifier(column: &str) -> f64 {
    match column.to_lowercase().as_str() {
        // high cardinality
        "id" | "email" | "username" | "ssn" | "phone" => 0.1,
        // medium
        "country" | "state" | "city" | "department" | "category" => 0.2,
        // low
        "gender" | "status" | "type" | "level" => 0.4,
        // very low
        "age" | "salary" | "score" | "rating" => 0.6,
        _ => DEFAULT_COLUMN_MODIFIER,
    }
}

/// Value commonality modifier for the display form of a literal,
/// looked up case-insensitively
pub fn value_modifier(value: &str) -> f64 {
    match value.to_lowercase().as_str() {
        "us" | "usa" | "united states" => 0.3,
        "active" | "enabled" | "true" | "1" => 0.3,
        "18" | "21" | "25" | "30" | "35" | "40" | "50" => 0.4,
        _ => DEFAULT_VALUE_MODIFIER,
    }
}
