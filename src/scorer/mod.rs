//! Selectivity scorer for queryopt
//!
//! Multiplicative weighting of three independent signals, each in (0, 1]:
//!
//! 1. Operator class (equality < range < inequality < pattern)
//! 2. Column cardinality (known high-cardinality columns score lowest)
//! 3. Value commonality (common literals are discounted)
//!
//! Tables are read-only constants, so scoring is safe to call from any
//! number of threads.

mod scorer;
mod tables;

pub use scorer::{SelectivityScore, SelectivityScorer};
pub use tables::{
    column_modifier, operator_base, value_modifier, OperatorClass, DEFAULT_COLUMN_MODIFIER,
    DEFAULT_OPERATOR_SCORE, DEFAULT_VALUE_MODIFIER,
};
