use arbitrary::Arbitrary;

use crate::core::{
    error::{AddEdgeError, DuplicateVertexError},
    Graph,
};

/// Vertex label drawn from a small space so that generated operations refer
/// to existing vertices and collide often.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(pub u8);

impl Label {
    pub fn name(&self) -> String {
        format!("v{}", self.0 % 32)
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum GraphOp<W> {
    AddVertex(Label),
    AddEdge(Label, Label, W),
    AddUndirectedEdge(Label, Label, W),
}

#[derive(Debug, PartialEq)]
pub enum GraphOpResult {
    AddVertex(Result<(), DuplicateVertexError>),
    AddEdge(Result<(), AddEdgeError>),
}

impl<W: Clone> GraphOp<W> {
    pub fn apply(&self, graph: &mut Graph<W>) -> GraphOpResult {
        match self {
            GraphOp::AddVertex(v) => GraphOpResult::AddVertex(graph.add_vertex(v.name())),
            GraphOp::AddEdge(u, v, weight) => {
                GraphOpResult::AddEdge(graph.add_edge(&u.name(), &v.name(), weight.clone()))
            }
            GraphOp::AddUndirectedEdge(u, v, weight) => GraphOpResult::AddEdge(
                graph.add_undirected_edge(&u.name(), &v.name(), weight.clone()),
            ),
        }
    }
}

/// Sequence of graph operations, vertices first so that edge operations have
/// something to connect.
#[derive(Debug, Arbitrary, Clone)]
pub struct GraphOpsSeq<W> {
    vertices: Vec<Label>,
    ops: Vec<GraphOp<W>>,
}

impl<W> IntoIterator for GraphOpsSeq<W> {
    type Item = GraphOp<W>;
    type IntoIter = std::iter::Chain<
        std::iter::Map<std::vec::IntoIter<Label>, fn(Label) -> GraphOp<W>>,
        std::vec::IntoIter<GraphOp<W>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let add_vertex: fn(Label) -> GraphOp<W> = GraphOp::AddVertex;
        self.vertices
            .into_iter()
            .map(add_vertex)
            .chain(self.ops)
    }
}
