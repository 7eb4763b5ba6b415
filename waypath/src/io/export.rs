use std::{
    fmt::Display,
    io::{self, Write},
};

use rustc_hash::FxHashSet;

use crate::{algo::PathResult, core::Graph};

/// Exporter to the [Graphviz DOT](https://graphviz.org/doc/info/lang.html)
/// language.
///
/// Vertices and edges are emitted in sorted order. If a path result is given,
/// the edges along the path are drawn in red.
pub struct Dot<'a, W> {
    name: String,
    highlight: Option<&'a PathResult<W>>,
}

impl<'a, W: Display> Dot<'a, W> {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            highlight: None,
        }
    }

    pub fn highlight(self, result: &'a PathResult<W>) -> Self {
        Self {
            highlight: Some(result),
            ..self
        }
    }

    pub fn export<O: Write>(&self, graph: &Graph<W>, out: &mut O) -> io::Result<()> {
        let path_edges = self
            .highlight
            .and_then(PathResult::path)
            .map(|path| {
                path.windows(2)
                    .map(|pair| (pair[0], pair[1]))
                    .collect::<FxHashSet<_>>()
            })
            .unwrap_or_default();

        writeln!(out, "digraph {} {{", self.name)?;

        let mut vertices = graph.vertices().collect::<Vec<_>>();
        vertices.sort_unstable();

        for vertex in vertices {
            writeln!(out, "    {vertex:?};")?;
        }

        let mut edges = graph.edges().collect::<Vec<_>>();
        edges.sort_unstable_by(|lhs, rhs| (lhs.src(), lhs.dst()).cmp(&(rhs.src(), rhs.dst())));

        for edge in edges {
            let label = edge.weight().to_string();
            if path_edges.contains(&(edge.src(), edge.dst())) {
                writeln!(
                    out,
                    "    {:?} -> {:?} [label={label:?}, color=red];",
                    edge.src(),
                    edge.dst()
                )?;
            } else {
                writeln!(out, "    {:?} -> {:?} [label={label:?}];", edge.src(), edge.dst())?;
            }
        }

        writeln!(out, "}}")?;

        Ok(())
    }

    pub fn to_string(&self, graph: &Graph<W>) -> String {
        let mut buf = Vec::new();
        self.export(graph, &mut buf)
            .expect("writing to vec does not fail");

        String::from_utf8(buf).expect("dot format is text format")
    }
}

#[cfg(test)]
mod tests {
    use crate::{algo::shortest_path, infra::testing::create_diamond};

    use super::*;

    #[test]
    fn plain() {
        let mut graph = Graph::new();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_edge("A", "B", 3u32).unwrap();

        assert_eq!(
            Dot::new(None).to_string(&graph),
            "digraph G {\n    \"A\";\n    \"B\";\n    \"A\" -> \"B\" [label=\"3\"];\n}\n"
        );
    }

    #[test]
    fn highlighted_path() {
        let graph = create_diamond();
        let result = shortest_path(&graph, "A", "D").unwrap();

        let dot = Dot::new(Some("paths".to_string()))
            .highlight(&result)
            .to_string(&graph);

        assert!(dot.starts_with("digraph paths {\n"));
        assert!(dot.contains("\"A\" -> \"B\" [label=\"1\", color=red];"));
        assert!(dot.contains("\"B\" -> \"C\" [label=\"2\", color=red];"));
        assert!(dot.contains("\"C\" -> \"D\" [label=\"1\", color=red];"));
        assert!(dot.contains("\"A\" -> \"C\" [label=\"4\"];"));
        assert!(dot.contains("\"B\" -> \"D\" [label=\"5\"];"));
    }
}
