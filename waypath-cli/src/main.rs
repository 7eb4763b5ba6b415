use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waypath::{algo::shortest_path, io::load_file, PathResult};

mod output;

use output::OutputFormat;

/// Weight type of graphs read from files.
type Weight = u64;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths over weighted graphs")]
struct Cli {
    /// Graph description to read. Prompts for the path when omitted.
    file: Option<PathBuf>,

    /// Output format of the results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter, overrides RUST_LOG (e.g. `debug` or `waypath=trace`).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let path = match cli.file {
        Some(path) => path,
        None => prompt_path()?,
    };

    let document = load_file::<Weight>(&path)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;

    info!(
        vertices = document.graph.vertex_count(),
        edges = document.graph.edge_count(),
        queries = document.queries.len(),
        "graph loaded"
    );

    let results = document
        .queries
        .iter()
        .map(|query| {
            shortest_path(&document.graph, &query.start, &query.finish).with_context(|| {
                format!(
                    "shortest path from {} to {} (line {}) failed",
                    query.start, query.finish, query.line
                )
            })
        })
        .collect::<Result<Vec<PathResult<Weight>>>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write(&mut out, cli.format, &document.graph, &results)
        .context("failed to write output")?;

    Ok(())
}

fn prompt_path() -> Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "What file do you want to read? ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read file name from stdin")?;

    let name = line.trim();
    if name.is_empty() {
        bail!("no file name given");
    }

    Ok(PathBuf::from(name))
}

fn init_tracing(log_level: Option<&str>) {
    let env_filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
