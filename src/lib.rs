//! queryopt - A deterministic, rule-based WHERE-clause optimizer
//!
//! Parses `SELECT * FROM <table> WHERE c1 AND c2 ...`, scores each
//! condition with static selectivity heuristics and reorders them so the
//! most selective filters run first.
//!
//! ```
//! let parsed = queryopt::parse("SELECT * FROM users WHERE age > 25 AND country = 'US'").unwrap();
//! let optimized = queryopt::optimize(&parsed);
//! assert_eq!(optimized.optimized_conditions[0].column, "country");
//! ```

pub mod cli;
pub mod observability;
pub mod optimizer;
pub mod parser;
pub mod scorer;

pub use optimizer::{OptimizedQuery, PlanOperation, PlanStep, QueryOptimizer};
pub use parser::{Condition, ConditionParser, ParseError, ParseMode, ParsedQuery, Value};
pub use scorer::{SelectivityScore, SelectivityScorer};

/// Parses a statement with the permissive parser
pub fn parse(text: &str) -> parser::ParseResult<ParsedQuery> {
    ConditionParser::new().parse(text)
}

/// Reorders conditions by selectivity and builds the execution plan
pub fn optimize(parsed: &ParsedQuery) -> OptimizedQuery<'_> {
    QueryOptimizer::new().optimize(parsed)
}

/// Builds the narrative explanation report
pub fn explain(parsed: &ParsedQuery) -> String {
    QueryOptimizer::new().explain_optimization(parsed)
}

/// Scores a single condition
pub fn score(condition: &Condition) -> SelectivityScore<'_> {
    SelectivityScorer::new().score_condition(condition)
}

/// Renders the recommended execution order for a set of conditions
pub fn recommend(conditions: &[Condition]) -> String {
    SelectivityScorer::new().get_optimization_recommendation(conditions)
}
