//! Observability for queryopt
//!
//! Structured logging through `tracing`. The library only emits events;
//! installing a subscriber is left to the binary.
//!
//! # Usage
//!
//! ```ignore
//! use queryopt::observability::{init_logging, Event, LogLevel};
//!
//! init_logging(LogLevel::Info, false);
//! tracing::info!(event = %Event::OptimizeComplete, "done");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, LogLevel};
