//! Selectivity scorer
//!
//! score = operator_base * column_modifier * value_modifier
//!
//! Lower is more selective and runs earlier. The score only induces an
//! order; it is not a probability.

use std::cmp::Ordering;

use serde::Serialize;

use super::tables::{column_modifier, value_modifier, OperatorClass};
use crate::parser::Condition;

/// Score for exactly one condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectivityScore<'a> {
    /// The scored condition
    pub condition: &'a Condition,
    /// Strictly positive; lower means more selective
    pub score: f64,
    /// The three contributing factors in words, joined by `; `
    pub reasoning: String,
}

impl SelectivityScore<'_> {
    /// Ascending by score. Equal scores compare equal so a stable sort
    /// keeps source order.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }
}

/// Stateless scorer over the static tables
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectivityScorer;

impl SelectivityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores one condition. Never fails: unknown operators, columns and
    /// values fall back to default factors.
    pub fn score_condition<'a>(&self, condition: &'a Condition) -> SelectivityScore<'a> {
        let class = OperatorClass::of(&condition.operator);
        let base = class.base_score();
        let column_mod = column_modifier(&condition.column);
        let value_mod = value_modifier(&condition.value.to_string());

        SelectivityScore {
            condition,
            score: base * column_mod * value_mod,
            reasoning: reasoning(condition, class, column_mod, value_mod),
        }
    }

    /// Scores every condition and stable-sorts ascending by score
    pub fn rank<'a>(&self, conditions: &'a [Condition]) -> Vec<SelectivityScore<'a>> {
        let mut scored: Vec<_> = conditions.iter().map(|c| self.score_condition(c)).collect();
        scored.sort_by(|a, b| a.cmp_score(b));
        scored
    }

    /// Renders the recommended execution order as a numbered list
    pub fn get_optimization_recommendation(&self, conditions: &[Condition]) -> String {
        match conditions.len() {
            0 => return "No conditions to optimize".to_string(),
            1 => return "Only one condition - no optimization needed".to_string(),
            _ => {}
        }

        let mut out = String::from("Recommended execution order (most selective first):\n");
        for (i, scored) in self.rank(conditions).iter().enumerate() {
            out.push_str(&format!(
                "{}. {} (score: {:.3})\n",
                i + 1,
                scored.condition.original_text,
                scored.score
            ));
            out.push_str(&format!("   Reasoning: {}\n", scored.reasoning));
        }
        out
    }
}

fn reasoning(
    condition: &Condition,
    class: OperatorClass,
    column_mod: f64,
    value_mod: f64,
) -> String {
    let mut parts = Vec::with_capacity(3);

    parts.push(match class {
        OperatorClass::Equality => "equality condition (highly selective)".to_string(),
        OperatorClass::Range => "range condition (moderately selective)".to_string(),
        OperatorClass::Inequality => "inequality condition (less selective)".to_string(),
        OperatorClass::Pattern => "pattern match condition (least selective)".to_string(),
        OperatorClass::Unknown => {
            format!("operator '{}' (moderate selectivity)", condition.operator)
        }
    });

    let cardinality = if column_mod <= 0.1 {
        "high"
    } else if column_mod <= 0.2 {
        "medium"
    } else {
        "low"
    };
    parts.push(format!(
        "column '{}' has {} cardinality",
        condition.column, cardinality
    ));

    if value_mod < 1.0 {
        parts.push(format!("value '{}' is common (less selective)", condition.value));
    } else if value_mod > 1.0 {
        parts.push(format!("value '{}' is uncommon (more selective)", condition.value));
    }

    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_score_equality_condition() {
        let condition = Condition::new("id", "=", 123, "id = 123");
        let score = SelectivityScorer::new().score_condition(&condition);

        assert!(approx(score.score, 0.01));
        assert!(score.reasoning.contains("equality condition"));
        assert!(score.reasoning.contains("high cardinality"));
    }

    #[test]
    fn test_score_range_with_common_value() {
        let condition = Condition::new("age", ">", 25, "age > 25");
        let score = SelectivityScorer::new().score_condition(&condition);

        assert!(approx(score.score, 0.3 * 0.6 * 0.4));
        assert_eq!(
            score.reasoning,
            "range condition (moderately selective); column 'age' has low cardinality; \
             value '25' is common (less selective)"
        );
    }

    #[test]
    fn test_reasoning_omits_value_clause_for_uncommon_value() {
        let condition = Condition::new("city", "=", "Lisbon", "city = 'Lisbon'");
        let score = SelectivityScorer::new().score_condition(&condition);

        assert_eq!(
            score.reasoning,
            "equality condition (highly selective); column 'city' has medium cardinality"
        );
    }

    #[test]
    fn test_unknown_operator_reasoning() {
        let condition = Condition::new("x", "=>", 1, "x => 1");
        let score = SelectivityScorer::new().score_condition(&condition);

        assert!(approx(score.score, 0.5 * 0.3 * 0.3));
        assert!(score.reasoning.starts_with("operator '=>' (moderate selectivity)"));
    }

    #[test]
    fn test_pattern_reasoning() {
        let condition = Condition::new("name", "LIKE", "A%", "name LIKE 'A%'");
        let score = SelectivityScorer::new().score_condition(&condition);

        assert!(approx(score.score, 0.7 * 0.3));
        assert!(score.reasoning.contains("pattern match"));
    }

    #[test]
    fn test_float_value_not_confused_with_common_integer() {
        let as_float = Condition::new("age", ">", 25.0, "age > 25.0");
        let score = SelectivityScorer::new().score_condition(&as_float);
        assert!(approx(score.score, 0.3 * 0.6));
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let conditions = vec![
            Condition::new("a", "=", 5, "a = 5"),
            Condition::new("b", "=", 6, "b = 6"),
            Condition::new("c", "=", 7, "c = 7"),
        ];
        let ranked = SelectivityScorer::new().rank(&conditions);
        let texts: Vec<_> = ranked.iter().map(|s| s.condition.original_text.as_str()).collect();
        assert_eq!(texts, vec!["a = 5", "b = 6", "c = 7"]);
    }

    #[test]
    fn test_recommendation_empty_and_single() {
        let scorer = SelectivityScorer::new();
        assert_eq!(scorer.get_optimization_recommendation(&[]), "No conditions to optimize");

        let one = vec![Condition::new("id", "=", 1, "id = 1")];
        assert_eq!(
            scorer.get_optimization_recommendation(&one),
            "Only one condition - no optimization needed"
        );
    }

    #[test]
    fn test_recommendation_listing() {
        let conditions = vec![
            Condition::new("age", ">", 25, "age > 25"),
            Condition::new("country", "=", "US", "country = 'US'"),
        ];
        let text = SelectivityScorer::new().get_optimization_recommendation(&conditions);

        let expected = "Recommended execution order (most selective first):\n\
            1. country = 'US' (score: 0.006)\n   \
            Reasoning: equality condition (highly selective); column 'country' has medium cardinality; value 'US' is common (less selective)\n\
            2. age > 25 (score: 0.072)\n   \
            Reasoning: range condition (moderately selective); column 'age' has low cardinality; value '25' is common (less selective)\n";
        assert_eq!(text, expected);
    }
}
