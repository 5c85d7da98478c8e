//! CLI argument definitions using clap
//!
//! Commands:
//! - queryopt demo
//! - queryopt optimize <QUERY>
//! - queryopt explain <QUERY>
//! - queryopt interactive
//! - queryopt batch <FILE>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// queryopt - rule-based WHERE-clause optimizer
#[derive(Parser, Debug)]
#[command(name = "queryopt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail on malformed conditions instead of dropping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Optimize the configured example queries
    Demo,

    /// Optimize a single query and print the plan
    Optimize {
        /// SQL statement, e.g. "SELECT * FROM users WHERE age > 25"
        query: String,
    },

    /// Print the detailed optimization explanation for a query
    Explain {
        /// SQL statement
        query: String,
    },

    /// Read queries from stdin until quit
    Interactive,

    /// Optimize every query in a file, one per line
    Batch {
        /// File with one query per line; blank lines and `--` comments are skipped
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
