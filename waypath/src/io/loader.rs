//! Loader of the line-oriented graph description.
//!
//! ```text
//! directed
//! vertex A
//! vertex B
//! edge A B 3
//! dijkstra A B
//! ```
//!
//! The first line is either `directed` or `undirected`. Then every line is
//! one of
//!
//! * `vertex <id>` adding a vertex,
//! * `edge <v1> <v2> <weight>` adding an edge from `v1` to `v2`, or edges in
//!   both directions for an `undirected` graph,
//! * `<anything> <start> <finish>` requesting the shortest path from `start`
//!   to `finish`.
//!
//! Blank lines are skipped.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;
use tracing::debug;

use crate::core::{
    error::{AddEdgeError, DuplicateVertexError, UnknownVertexError},
    Graph, Weight,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl FromStr for GraphKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directed" => Ok(GraphKind::Directed),
            "undirected" => Ok(GraphKind::Undirected),
            _ => Err(()),
        }
    }
}

/// Request for the shortest path between two vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Query {
    /// 1-based line number of the request.
    pub line: usize,
    pub start: String,
    pub finish: String,
}

/// Loaded graph with the queries in the order they appeared.
#[derive(Debug, Clone)]
pub struct Document<W> {
    pub kind: GraphKind,
    pub graph: Graph<W>,
    pub queries: Vec<Query>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is empty, expected `directed` or `undirected` first")]
    MissingHeader,

    #[error("line {line}: unknown graph kind `{found}`, expected `directed` or `undirected`")]
    UnknownKind { line: usize, found: String },

    #[error("line {line}: expected `{expected}`")]
    Syntax { line: usize, expected: &'static str },

    #[error("line {line}: invalid weight `{found}`")]
    InvalidWeight { line: usize, found: String },

    #[error("line {line}: {source}")]
    DuplicateVertex {
        line: usize,
        #[source]
        source: DuplicateVertexError,
    },

    #[error("line {line}: {source}")]
    AddEdge {
        line: usize,
        #[source]
        source: AddEdgeError,
    },

    #[error("line {line}: {source}")]
    UnknownVertex {
        line: usize,
        #[source]
        source: UnknownVertexError,
    },
}

impl LoadError {
    /// 1-based line number the error relates to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Io { .. } | LoadError::MissingHeader => None,
            LoadError::UnknownKind { line, .. }
            | LoadError::Syntax { line, .. }
            | LoadError::InvalidWeight { line, .. }
            | LoadError::DuplicateVertex { line, .. }
            | LoadError::AddEdge { line, .. }
            | LoadError::UnknownVertex { line, .. } => Some(*line),
        }
    }
}

pub fn load_file<W>(path: impl AsRef<Path>) -> Result<Document<W>, LoadError>
where
    W: Weight + FromStr,
{
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = input.len(), "loading graph");
    load_str(&input)
}

pub fn load_str<W>(input: &str) -> Result<Document<W>, LoadError>
where
    W: Weight + FromStr,
{
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, words)| !words.is_empty());

    let (line, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let kind = match header.as_slice() {
        [kind] => kind.parse().map_err(|_| LoadError::UnknownKind {
            line,
            found: kind.to_string(),
        })?,
        _ => {
            return Err(LoadError::UnknownKind {
                line,
                found: header.join(" "),
            })
        }
    };

    let mut graph = Graph::new();
    let mut queries = Vec::new();

    for (line, words) in lines {
        match words.as_slice() {
            ["vertex", id] => graph
                .add_vertex(*id)
                .map_err(|source| LoadError::DuplicateVertex { line, source })?,
            ["vertex", ..] => {
                return Err(LoadError::Syntax {
                    line,
                    expected: "vertex <id>",
                })
            }
            ["edge", u, v, weight] => {
                let weight = weight.parse().map_err(|_| LoadError::InvalidWeight {
                    line,
                    found: weight.to_string(),
                })?;

                let added = match kind {
                    GraphKind::Directed => graph.add_edge(u, v, weight),
                    GraphKind::Undirected => graph.add_undirected_edge(u, v, weight),
                };
                added.map_err(|source| LoadError::AddEdge { line, source })?;
            }
            ["edge", ..] => {
                return Err(LoadError::Syntax {
                    line,
                    expected: "edge <v1> <v2> <weight>",
                })
            }
            [_, start, finish] => {
                for vertex in [start, finish] {
                    if !graph.contains_vertex(vertex) {
                        return Err(LoadError::UnknownVertex {
                            line,
                            source: UnknownVertexError::new(*vertex),
                        });
                    }
                }

                queries.push(Query {
                    line,
                    start: start.to_string(),
                    finish: finish.to_string(),
                });
            }
            _ => {
                return Err(LoadError::Syntax {
                    line,
                    expected: "<query> <start> <finish>",
                })
            }
        }
    }

    debug!(
        ?kind,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        queries = queries.len(),
        "graph loaded"
    );

    Ok(Document {
        kind,
        graph,
        queries,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use crate::core::error::Endpoint;

    use super::*;

    const DIAMOND: &str = "\
directed
vertex A
vertex B
vertex C
vertex D
edge A B 1
edge A C 4
edge B C 2
edge B D 5
edge C D 1
dijkstra A D
";

    #[test]
    fn directed() {
        let doc = load_str::<u32>(DIAMOND).unwrap();

        assert_eq!(doc.kind, GraphKind::Directed);
        assert_eq!(doc.graph.vertex_count(), 4);
        assert_eq!(doc.graph.edge_count(), 5);
        assert_eq!(doc.graph.weight("B", "D"), Ok(&5));
        assert!(!doc.graph.contains_edge("D", "B"));
        assert_eq!(
            doc.queries,
            vec![Query {
                line: 11,
                start: "A".to_string(),
                finish: "D".to_string()
            }]
        );
    }

    #[test]
    fn undirected_adds_both_directions() {
        let doc = load_str::<u32>("undirected\nvertex A\nvertex B\nedge A B 7\n").unwrap();

        assert_eq!(doc.kind, GraphKind::Undirected);
        assert_eq!(doc.graph.weight("A", "B"), Ok(&7));
        assert_eq!(doc.graph.weight("B", "A"), Ok(&7));
        assert!(doc.queries.is_empty());
    }

    #[test]
    fn blank_lines_and_extra_spaces() {
        let doc =
            load_str::<u32>("\n  directed \n\nvertex   A\nvertex B\n\nedge A  B 2\nrun A B\n\n")
                .unwrap();

        assert_eq!(doc.graph.weight("A", "B"), Ok(&2));
        assert_eq!(doc.queries[0].line, 8);
    }

    #[test]
    fn multiple_queries() {
        let input = format!("{DIAMOND}dijkstra B D\nfoo C C\n");
        let doc = load_str::<u32>(&input).unwrap();

        let pairs = doc
            .queries
            .iter()
            .map(|q| (q.start.as_str(), q.finish.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![("A", "D"), ("B", "D"), ("C", "C")]);
    }

    #[test]
    fn empty_input() {
        assert_matches!(load_str::<u32>(""), Err(LoadError::MissingHeader));
        assert_matches!(load_str::<u32>("\n \n"), Err(LoadError::MissingHeader));
    }

    #[test]
    fn unknown_kind() {
        assert_matches!(
            load_str::<u32>("bidirected\nvertex A\n"),
            Err(LoadError::UnknownKind { line: 1, found }) if found == "bidirected"
        );
    }

    #[test]
    fn invalid_weight() {
        let err = load_str::<u32>("directed\nvertex A\nvertex B\nedge A B x\n").unwrap_err();

        assert_matches!(err, LoadError::InvalidWeight { line: 4, ref found } if found == "x");
        assert_eq!(err.to_string(), "line 4: invalid weight `x`");
    }

    #[test]
    fn negative_weight_rejected_by_unsigned_type() {
        let input = "directed\nvertex A\nvertex B\nedge A B -1\n";

        assert_matches!(
            load_str::<u32>(input),
            Err(LoadError::InvalidWeight { line: 4, .. })
        );
        assert_eq!(
            load_str::<i32>(input).unwrap().graph.weight("A", "B"),
            Ok(&-1)
        );
    }

    #[test]
    fn syntax_errors() {
        assert_matches!(
            load_str::<u32>("directed\nvertex\n"),
            Err(LoadError::Syntax { line: 2, .. })
        );
        assert_matches!(
            load_str::<u32>("directed\nvertex A\nedge A A\n"),
            Err(LoadError::Syntax { line: 3, .. })
        );
        assert_matches!(
            load_str::<u32>("directed\nvertex A\nshort\n"),
            Err(LoadError::Syntax { line: 3, .. })
        );
    }

    #[test]
    fn graph_errors_carry_line() {
        assert_matches!(
            load_str::<u32>("directed\nvertex A\nvertex A\n"),
            Err(LoadError::DuplicateVertex { line: 3, .. })
        );
        assert_matches!(
            load_str::<u32>("directed\nvertex A\nedge A B 1\n"),
            Err(LoadError::AddEdge {
                line: 3,
                source: AddEdgeError::UnknownVertex(UnknownVertexError {
                    endpoint: Some(Endpoint::Destination),
                    ..
                })
            })
        );
        assert_matches!(
            load_str::<u32>("directed\nvertex A\nvertex B\nedge A B 1\nedge A B 2\n"),
            Err(LoadError::AddEdge {
                line: 5,
                source: AddEdgeError::Duplicate(_)
            })
        );

        let err = load_str::<u32>("directed\nvertex A\ndijkstra A Z\n").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.to_string(), "line 3: vertex does not exist: Z");
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DIAMOND.as_bytes()).unwrap();

        let doc = load_file::<u64>(file.path()).unwrap();
        assert_eq!(doc.graph.edge_count(), 5);

        let missing = file.path().with_extension("missing");
        assert_matches!(load_file::<u64>(&missing), Err(LoadError::Io { .. }));
    }
}
