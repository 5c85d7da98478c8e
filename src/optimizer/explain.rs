//! Optimization explanation report
//!
//! Produces deterministic, human-readable narrative output. Independent of
//! `QueryOptimizer::optimize`; it rescores the conditions itself.

use crate::observability::Event;
use crate::parser::ParsedQuery;
use crate::scorer::SelectivityScorer;

pub const EXPLAIN_NO_CONDITIONS: &str =
    "No WHERE conditions to optimize. Query will perform a full table scan.";

const RULES: &str = "OPTIMIZATION RULES APPLIED:\n\
1. Selectivity-based reordering: Conditions are reordered based on their selectivity scores\n\
2. Most selective conditions are applied first to reduce the working set early\n\
3. Selectivity is determined by:\n   \
- Operator type (equality > range > inequality)\n   \
- Column cardinality (high cardinality = more selective)\n   \
- Value frequency (common values = less selective)\n\n";

const BENEFITS: &str = "EXPECTED BENEFITS:\n\
- Reduced I/O operations by filtering early\n\
- Lower memory usage for intermediate results\n\
- Faster query execution (especially with large datasets)\n\
- Better utilization of database indexes (if available)\n";

/// Builds the explanation report for a parsed query
pub fn explain_optimization(scorer: &SelectivityScorer, parsed: &ParsedQuery) -> String {
    if parsed.conditions.is_empty() {
        return EXPLAIN_NO_CONDITIONS.to_string();
    }

    let mut out = String::from("QUERY OPTIMIZATION EXPLANATION\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    out.push_str(&format!("Original Query: {}\n\n", parsed.original_query));
    out.push_str(RULES);

    out.push_str("CONDITION ANALYSIS:\n");
    for (i, condition) in parsed.conditions.iter().enumerate() {
        let scored = scorer.score_condition(condition);
        out.push_str(&format!("{}. {}\n", i + 1, condition.original_text));
        out.push_str(&format!("   Selectivity Score: {:.3}\n", scored.score));
        out.push_str(&format!("   Reasoning: {}\n\n", scored.reasoning));
    }

    out.push_str("OPTIMIZATION RECOMMENDATION:\n");
    out.push_str(&scorer.get_optimization_recommendation(&parsed.conditions));
    out.push('\n');

    out.push_str(BENEFITS);

    tracing::debug!(
        event = %Event::ExplainGenerated,
        table = %parsed.table_name,
        conditions = parsed.conditions.len()
    );

    out
}
