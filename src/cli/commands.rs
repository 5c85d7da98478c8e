//! CLI command implementations
//!
//! Commands are thin shells over the library: parse, optimize, explain and
//! print. Output is written to a caller-supplied writer so commands can be
//! exercised without a terminal.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::json;

use crate::observability::{init_logging, Event};
use crate::optimizer::{optimize_batch, BatchOutcome, OptimizedQuery, PlanStep, QueryOptimizer};
use crate::parser::{ConditionParser, ParsedQuery};

use super::args::{Cli, Command};
use super::config::{Config, OutputFormat};
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{write_error, write_response, write_text};

const RULE: &str = "================================================================================";

/// Shared state for one CLI invocation
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    parser: ConditionParser,
    optimizer: QueryOptimizer,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            parser: ConditionParser::with_mode(config.parse_mode()),
            optimizer: QueryOptimizer::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn json(&self) -> bool {
        self.config().output_format() == OutputFormat::Json
    }
}

/// Entry point used by `main`
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = Config::resolve(cli.config.as_deref())?.with_overrides(cli.strict, cli.json);

    init_logging(config.log_level(), config.log_json);
    tracing::debug!(
        event = %Event::ConfigLoaded,
        log_level = %config.log_level(),
        strict = config.strict_conditions,
        output = %config.output_format
    );

    let session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&session, cli.command, &mut out)
}

/// Run the appropriate command based on CLI args
pub fn run_command<W: Write>(session: &Session, cmd: Command, out: &mut W) -> CliResult<()> {
    match cmd {
        Command::Demo => demo(session, out),
        Command::Optimize { query } => optimize(session, &query, out),
        Command::Explain { query } => explain(session, &query, out),
        Command::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            interactive(session, &mut input, out)
        }
        Command::Batch { file } => batch(session, &file, out),
    }
}

/// Renders plan steps as `  Step N: <description>` lines
pub fn render_plan(steps: &[PlanStep]) -> String {
    steps
        .iter()
        .map(|s| format!("  Step {}: {}", s.step, s.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_parsed(parsed: &ParsedQuery) -> String {
    let mut lines = vec![
        "Parsed successfully:".to_string(),
        format!("  Table: {}", parsed.table_name),
        format!("  Conditions: {}", parsed.conditions.len()),
    ];
    for (i, condition) in parsed.conditions.iter().enumerate() {
        lines.push(format!("    {}. {}", i + 1, condition.original_text));
    }
    lines.join("\n")
}

fn render_optimized(optimized: &OptimizedQuery<'_>) -> String {
    format!(
        "OPTIMIZATION RESULTS:\n{}\n\nEXECUTION PLAN:\n{}\n",
        optimized.optimization_summary,
        render_plan(&optimized.execution_plan)
    )
}

/// Run every configured demo query
pub fn demo<W: Write>(session: &Session, out: &mut W) -> CliResult<()> {
    if session.json() {
        for query in &session.config().demo_queries {
            // Parse failures are already reported in the output stream
            if let Err(e) = optimize(session, query, out) {
                if e.code() != CliErrorCode::ParseError {
                    return Err(e);
                }
            }
        }
        return Ok(());
    }

    write_text(out, &format!("Query Optimizer\n{}\n", "=".repeat(40)))?;

    for (i, query) in session.config().demo_queries.iter().enumerate() {
        write_text(out, &format!("EXAMPLE {}\n{}", i + 1, "-".repeat(20)))?;
        write_text(out, &format!("Query: {}\n", query))?;

        match session.parser.parse(query) {
            Ok(parsed) => {
                write_text(out, &format!("{}\n", render_parsed(&parsed)))?;
                let optimized = session.optimizer.optimize(&parsed);
                write_text(out, &render_optimized(&optimized))?;
                write_text(out, "DETAILED EXPLANATION:")?;
                write_text(out, &session.optimizer.explain_optimization(&parsed))?;
            }
            Err(e) => {
                write_text(out, &format!("Error processing query: {}", e))?;
            }
        }

        write_text(out, &format!("\n{}\n", RULE))?;
    }

    Ok(())
}

/// Optimize one query and print summary and plan
pub fn optimize<W: Write>(session: &Session, query: &str, out: &mut W) -> CliResult<()> {
    let parsed = match session.parser.parse(query) {
        Ok(parsed) => parsed,
        Err(e) => {
            if session.json() {
                write_error(out, e.code(), &e.to_string())?;
            }
            return Err(e.into());
        }
    };
    let optimized = session.optimizer.optimize(&parsed);

    if session.json() {
        write_response(out, serde_json::to_value(&optimized)?)
    } else {
        write_text(out, &render_optimized(&optimized))
    }
}

/// Print the explanation report for one query
pub fn explain<W: Write>(session: &Session, query: &str, out: &mut W) -> CliResult<()> {
    let parsed = match session.parser.parse(query) {
        Ok(parsed) => parsed,
        Err(e) => {
            if session.json() {
                write_error(out, e.code(), &e.to_string())?;
            }
            return Err(e.into());
        }
    };
    let explanation = session.optimizer.explain_optimization(&parsed);

    if session.json() {
        write_response(out, json!({ "explanation": explanation }))
    } else {
        write_text(out, &explanation)
    }
}

/// Read-optimize-print loop.
///
/// `quit`, `exit`, `q` or end of input leave the loop. Errors are reported
/// and the loop continues.
pub fn interactive<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    write_text(out, "Interactive Query Optimizer")?;
    write_text(out, &"=".repeat(30))?;
    write_text(out, "Enter SQL queries to optimize (type 'quit' to exit)")?;
    write_text(out, "Format: SELECT * FROM table WHERE condition1 AND condition2\n")?;

    let mut buf = Vec::new();
    loop {
        write!(out, "Enter query: ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            write_text(out, "\nGoodbye!")?;
            return Ok(());
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                write_text(out, &format!("Error: input is not valid UTF-8 ({})", e))?;
                write_text(out, "Please check your query format and try again.\n")?;
                continue;
            }
        };

        let query = line.trim();
        if matches!(query.to_lowercase().as_str(), "quit" | "exit" | "q") {
            write_text(out, "Goodbye!")?;
            return Ok(());
        }
        if query.is_empty() {
            continue;
        }

        match session.parser.parse(query) {
            Ok(parsed) => {
                let optimized = session.optimizer.optimize(&parsed);
                write_text(out, &format!("\n{}", render_optimized(&optimized)))?;
            }
            Err(e) => {
                write_text(out, &format!("Error: {}", e))?;
                write_text(out, "Please check your query format and try again.\n")?;
            }
        }
    }
}

/// Read one query per line from a file. Blank lines and `--` comments are skipped.
pub fn read_batch_file(path: &Path) -> CliResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read {}: {}", path.display(), e))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with("--"))
        .map(str::to_string)
        .collect())
}

/// Optimize every query in a file in parallel; print results in file order
pub fn batch<W: Write>(session: &Session, path: &Path, out: &mut W) -> CliResult<()> {
    let queries = read_batch_file(path)?;
    let outcomes = optimize_batch(&queries, session.config().parse_mode());

    for (i, outcome) in outcomes.iter().enumerate() {
        if session.json() {
            write_batch_json(out, outcome)?;
        } else {
            write_batch_text(out, i + 1, outcome)?;
        }
    }

    Ok(())
}

fn write_batch_json<W: Write>(out: &mut W, outcome: &BatchOutcome) -> CliResult<()> {
    match &outcome.result {
        Ok(report) => write_response(out, serde_json::to_value(report)?),
        Err(e) => write_error(out, e.code(), &e.to_string()),
    }
}

fn write_batch_text<W: Write>(out: &mut W, index: usize, outcome: &BatchOutcome) -> CliResult<()> {
    write_text(out, &format!("[{}] {}", index, outcome.query))?;
    match &outcome.result {
        Ok(report) => write_text(
            out,
            &format!(
                "{}\n{}\n",
                report.optimization_summary,
                render_plan(&report.execution_plan)
            ),
        ),
        Err(e) => write_text(out, &format!("Error: {}\n", e)),
    }
}
