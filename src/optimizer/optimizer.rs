//! Rule-based query optimizer
//!
//! Reorders conditions so the most selective run first.
//!
//! Rules:
//! 1. Score every condition
//! 2. Stable-sort ascending by score (ties keep source order)
//! 3. Emit one FILTER step per condition, then RETURN

use serde::Serialize;

use super::explain;
use super::plan::PlanStep;
use crate::observability::Event;
use crate::parser::{Condition, ParsedQuery};
use crate::scorer::SelectivityScorer;

pub const SUMMARY_FULL_SCAN: &str = "No WHERE conditions - full table scan";
pub const SUMMARY_NOT_NEEDED: &str = "No optimization needed - single condition or no conditions";
pub const SUMMARY_ALREADY_OPTIMAL: &str =
    "No optimization needed - conditions already in optimal order";

/// Optimizer output. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedQuery<'a> {
    /// The query that was optimized
    pub original_query: &'a ParsedQuery,
    /// Permutation of the input conditions, ascending by score
    pub optimized_conditions: Vec<Condition>,
    pub execution_plan: Vec<PlanStep>,
    pub optimization_summary: String,
}

impl OptimizedQuery<'_> {
    /// Returns true when the optimized order differs from source order
    pub fn was_reordered(&self) -> bool {
        self.original_query.conditions != self.optimized_conditions
    }
}

/// Stateless rule-based optimizer
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptimizer {
    scorer: SelectivityScorer,
}

impl QueryOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Optimizes a parsed query. Never fails.
    ///
    /// A query with no conditions yields `[SCAN, RETURN]` without scoring.
    pub fn optimize<'a>(&self, parsed: &'a ParsedQuery) -> OptimizedQuery<'a> {
        tracing::trace!(event = %Event::OptimizeStart, table = %parsed.table_name);

        if parsed.conditions.is_empty() {
            return self.full_scan(parsed);
        }

        let optimized_conditions = self.reorder(&parsed.conditions);
        let execution_plan = build_execution_plan(&optimized_conditions);
        let optimization_summary = summarize(&parsed.conditions, &optimized_conditions);

        let optimized = OptimizedQuery {
            original_query: parsed,
            optimized_conditions,
            execution_plan,
            optimization_summary,
        };

        tracing::debug!(
            event = %Event::OptimizeComplete,
            table = %parsed.table_name,
            conditions = parsed.conditions.len(),
            reordered = optimized.was_reordered(),
            "query optimized"
        );

        optimized
    }

    /// Builds the narrative explanation report for a parsed query
    pub fn explain_optimization(&self, parsed: &ParsedQuery) -> String {
        explain::explain_optimization(&self.scorer, parsed)
    }

    fn reorder(&self, conditions: &[Condition]) -> Vec<Condition> {
        self.scorer
            .rank(conditions)
            .into_iter()
            .map(|scored| scored.condition.clone())
            .collect()
    }

    fn full_scan<'a>(&self, parsed: &'a ParsedQuery) -> OptimizedQuery<'a> {
        tracing::debug!(
            event = %Event::OptimizeComplete,
            table = %parsed.table_name,
            conditions = 0usize,
            "no conditions, full table scan"
        );

        OptimizedQuery {
            original_query: parsed,
            optimized_conditions: Vec::new(),
            execution_plan: vec![PlanStep::scan(1, &parsed.table_name), PlanStep::return_all(2)],
            optimization_summary: SUMMARY_FULL_SCAN.to_string(),
        }
    }
}

/// One FILTER step per condition in the given order, then RETURN
pub fn build_execution_plan(conditions: &[Condition]) -> Vec<PlanStep> {
    let mut plan: Vec<PlanStep> = conditions
        .iter()
        .enumerate()
        .map(|(i, condition)| PlanStep::filter(i + 1, condition))
        .collect();
    plan.push(PlanStep::return_filtered(conditions.len() + 1));
    plan
}

fn summarize(original: &[Condition], optimized: &[Condition]) -> String {
    if original.len() <= 1 {
        return SUMMARY_NOT_NEEDED.to_string();
    }

    if original == optimized {
        return SUMMARY_ALREADY_OPTIMAL.to_string();
    }

    let mut summary = String::from("Query optimization applied:\n");
    summary.push_str(&format!(
        "- Reordered {} conditions for better performance\n",
        original.len()
    ));
    summary.push_str("- Most selective conditions will be applied first\n");
    summary.push_str(
        "- Expected performance improvement: 20-80% (depending on data distribution)\n\n",
    );

    summary.push_str("Original order:\n");
    for (i, condition) in original.iter().enumerate() {
        summary.push_str(&format!("  {}. {}\n", i + 1, condition.original_text));
    }

    summary.push_str("\nOptimized order:\n");
    for (i, condition) in optimized.iter().enumerate() {
        summary.push_str(&format!("  {}. {}\n", i + 1, condition.original_text));
    }

    summary
}
