use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use waypath::{
    io::{render::GraphSummary, render::Report, Dot},
    Graph, Outcome, PathResult, Weight,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Graph summary and report for every query.
    Text,
    /// One JSON object per query, one per line.
    Json,
    /// Graphviz DOT with the path of the last query highlighted.
    Dot,
}

/// Query result without the distance and predecessor tables.
#[derive(Serialize)]
struct JsonResult<'a, W> {
    start: &'a str,
    finish: &'a str,
    #[serde(flatten)]
    outcome: &'a Outcome<W>,
    path: Option<Vec<&'a str>>,
}

impl<'a, W> From<&'a PathResult<W>> for JsonResult<'a, W> {
    fn from(result: &'a PathResult<W>) -> Self {
        Self {
            start: result.start(),
            finish: result.finish(),
            outcome: result.outcome(),
            path: result.path(),
        }
    }
}

pub fn write<O, W>(
    out: &mut O,
    format: OutputFormat,
    graph: &Graph<W>,
    results: &[PathResult<W>],
) -> io::Result<()>
where
    O: Write,
    W: Weight + Serialize,
{
    match format {
        OutputFormat::Text => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}\n{}", GraphSummary(graph), Report(result))?;
            }
        }
        OutputFormat::Json => {
            for result in results {
                serde_json::to_writer(&mut *out, &JsonResult::from(result))?;
                writeln!(out)?;
            }
        }
        OutputFormat::Dot => {
            let dot = match results.last() {
                Some(result) => Dot::new(None).highlight(result),
                None => Dot::new(None),
            };
            dot.export(graph, out)?;
        }
    }

    Ok(())
}
