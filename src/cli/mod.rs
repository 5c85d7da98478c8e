//! CLI module for queryopt
//!
//! Provides command-line front ends for:
//! - demo: Run the configured example queries
//! - optimize: One-shot optimization
//! - explain: One-shot explanation
//! - interactive: Read queries from stdin
//! - batch: Optimize a file of queries in parallel

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    batch, demo, explain, interactive, optimize, read_batch_file, render_plan, run, run_command,
    Session,
};
pub use config::{Config, OutputFormat};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response, write_text};
