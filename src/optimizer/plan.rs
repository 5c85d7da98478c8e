//! Execution plan steps

use serde::Serialize;

use crate::parser::Condition;

/// Plan step operation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanOperation {
    /// Full table scan (only when there are no conditions)
    Scan,
    /// Apply one condition
    Filter,
    /// Return the surviving rows
    Return,
}

impl PlanOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanOperation::Scan => "SCAN",
            PlanOperation::Filter => "FILTER",
            PlanOperation::Return => "RETURN",
        }
    }
}

/// One step of a linear execution plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStep {
    /// 1-based position in the plan
    pub step: usize,
    pub operation: PlanOperation,
    pub description: String,
    /// Set for FILTER steps only. Its fields serialize inline on the step.
    #[serde(flatten)]
    pub condition: Option<Condition>,
}

impl PlanStep {
    pub fn scan(step: usize, table: &str) -> Self {
        Self {
            step,
            operation: PlanOperation::Scan,
            description: format!("Scan table \"{}\"", table),
            condition: None,
        }
    }

    pub fn filter(step: usize, condition: &Condition) -> Self {
        Self {
            step,
            operation: PlanOperation::Filter,
            description: format!("Apply filter: {}", condition.original_text),
            condition: Some(condition.clone()),
        }
    }

    pub fn return_all(step: usize) -> Self {
        Self {
            step,
            operation: PlanOperation::Return,
            description: "Return all results".to_string(),
            condition: None,
        }
    }

    pub fn return_filtered(step: usize) -> Self {
        Self {
            step,
            operation: PlanOperation::Return,
            description: "Return filtered results".to_string(),
            condition: None,
        }
    }
}
