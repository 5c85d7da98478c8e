//! Observable events for queryopt
//!
//! Every log line emitted by the library carries an `event` field whose
//! value is one of these names.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Parsing
    /// Parse of one statement begins
    ParseStart,
    /// Statement parsed into a table and conditions
    ParseComplete,
    /// Statement rejected by the grammar
    ParseRejected,
    /// A malformed WHERE fragment was skipped
    ConditionDropped,

    // Optimization
    /// Optimization of one parsed query begins
    OptimizeStart,
    /// Optimized plan produced
    OptimizeComplete,
    /// Explanation report produced
    ExplainGenerated,

    // Batch
    /// Batch of independent queries submitted
    BatchStart,
    /// All queries in a batch processed
    BatchComplete,
}

impl Event {
    /// Returns the event name as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ParseStart => "PARSE_START",
            Event::ParseComplete => "PARSE_COMPLETE",
            Event::ParseRejected => "PARSE_REJECTED",
            Event::ConditionDropped => "CONDITION_DROPPED",
            Event::OptimizeStart => "OPTIMIZE_START",
            Event::OptimizeComplete => "OPTIMIZE_COMPLETE",
            Event::ExplainGenerated => "EXPLAIN_GENERATED",
            Event::BatchStart => "BATCH_START",
            Event::BatchComplete => "BATCH_COMPLETE",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
