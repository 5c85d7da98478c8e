//! Query optimizer for queryopt
//!
//! Consumes a `ParsedQuery`, scores each condition and produces a
//! reordered condition list, a linear execution plan and a summary.
//!
//! # Design Principles
//!
//! - Deterministic: same input → same plan
//! - Stable: equal scores keep source order
//! - Total: never fails; empty and single-condition queries are ordinary
//!   branches
//!
//! Independent queries can be optimized in parallel with `optimize_batch`.

mod batch;
mod explain;
mod optimizer;
mod plan;

pub use batch::{optimize_batch, BatchOutcome, BatchReport};
pub use explain::{explain_optimization, EXPLAIN_NO_CONDITIONS};
pub use optimizer::{
    build_execution_plan, OptimizedQuery, QueryOptimizer, SUMMARY_ALREADY_OPTIMAL,
    SUMMARY_FULL_SCAN, SUMMARY_NOT_NEEDED,
};
pub use plan::{PlanOperation, PlanStep};
