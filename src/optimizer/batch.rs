//! Parallel optimization of independent queries
//!
//! One rayon task per query. Output order matches input order.

use rayon::prelude::*;
use serde::Serialize;

use super::optimizer::{OptimizedQuery, QueryOptimizer};
use super::plan::PlanStep;
use crate::observability::Event;
use crate::parser::{Condition, ConditionParser, ParseError, ParseMode, ParsedQuery};

/// Owned optimization result for one batch entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub parsed: ParsedQuery,
    pub optimized_conditions: Vec<Condition>,
    pub execution_plan: Vec<PlanStep>,
    pub optimization_summary: String,
}

/// Outcome for one input query
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// Input text as given
    pub query: String,
    pub result: Result<BatchReport, ParseError>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

fn process(parser: &ConditionParser, optimizer: &QueryOptimizer, query: &str) -> BatchOutcome {
    let result = parser.parse(query).map(|parsed| {
        let OptimizedQuery {
            optimized_conditions,
            execution_plan,
            optimization_summary,
            ..
        } = optimizer.optimize(&parsed);
        BatchReport {
            parsed,
            optimized_conditions,
            execution_plan,
            optimization_summary,
        }
    });

    BatchOutcome {
        query: query.to_string(),
        result,
    }
}

/// Parses and optimizes every query in parallel
pub fn optimize_batch<S>(queries: &[S], mode: ParseMode) -> Vec<BatchOutcome>
where
    S: AsRef<str> + Sync,
{
    tracing::info!(event = %Event::BatchStart, queries = queries.len());

    let parser = ConditionParser::with_mode(mode);
    let optimizer = QueryOptimizer::new();

    let outcomes: Vec<BatchOutcome> = queries
        .par_iter()
        .map(|q| process(&parser, &optimizer, q.as_ref()))
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::info!(
        event = %Event::BatchComplete,
        queries = outcomes.len(),
        failed,
        "batch processed"
    );

    outcomes
}
