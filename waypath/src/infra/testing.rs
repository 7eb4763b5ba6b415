use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    core::{Graph, Weight},
    queue::{Order, PriorityQueue},
};

/// Graph with vertices A, B, C, D and edges A -> B (1), A -> C (4),
/// B -> C (2), B -> D (5) and C -> D (1).
pub fn create_diamond() -> Graph<u32> {
    let mut graph = Graph::new();

    for vertex in ["A", "B", "C", "D"] {
        graph.add_vertex(vertex).unwrap();
    }

    for (src, dst, weight) in [
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "C", 2),
        ("B", "D", 5),
        ("C", "D", 1),
    ] {
        graph.add_edge(src, dst, weight).unwrap();
    }

    graph
}

/// Directed path `v0 -> v1 -> ... -> v{n-1}` with unit weights.
pub fn create_path(vertex_count: usize) -> Graph<u32> {
    let mut graph = Graph::new();

    for vertex in vertex_labels(vertex_count) {
        graph.add_vertex(vertex).unwrap();
    }

    for i in 1..vertex_count {
        graph
            .add_edge(&format!("v{}", i - 1), &format!("v{i}"), 1)
            .unwrap();
    }

    graph
}

/// Reference [Bellman-Ford] distances from `start` to every reached vertex.
///
/// Assumes there are no negative cycles.
///
/// [Bellman-Ford]: https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
pub fn bellman_ford<'a, W: Weight>(graph: &'a Graph<W>, start: &str) -> FxHashMap<&'a str, W> {
    let mut dist = FxHashMap::default();

    if let Some(start) = graph.vertices().find(|v| *v == start) {
        dist.insert(start, W::zero());
    }

    // Try to relax edges |V| - 1 times.
    for _ in 1..graph.vertex_count() {
        let mut relaxed = false;

        for edge in graph.edges() {
            let Some(&src_dist) = dist.get(edge.src()) else {
                continue;
            };

            let Some(next_dist) = src_dist.checked_add(*edge.weight()) else {
                continue;
            };

            // Relax if better.
            if dist.get(edge.dst()).map_or(true, |&curr| next_dist < curr) {
                dist.insert(edge.dst(), next_dist);
                relaxed = true;
            }
        }

        // If no distance was improved, then subsequent iterations would not
        // improve as well. So we can terminate early.
        if !relaxed {
            break;
        }
    }

    dist
}

/// Sum of the edge weights along the path, or `None` if some consecutive
/// vertices are not connected by an edge.
pub fn path_weight<W: Weight>(graph: &Graph<W>, path: &[&str]) -> Option<W> {
    path.windows(2).try_fold(W::zero(), |total, pair| {
        total.checked_add(*graph.weight(pair[0], pair[1]).ok()?)
    })
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("edge {0} is stored in the bucket of vertex {1}")]
    EdgeInWrongBucket(String, String),
    #[error("edge {0} leads to a vertex that does not exist")]
    DanglingEdge(String),
    #[error("edge {0} cannot be found by its endpoints")]
    EdgeLookupMismatch(String),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
}

pub fn check_consistency<W>(graph: &Graph<W>) -> Result<(), ConsistencyCheckError>
where
    W: Weight,
{
    let vertex_count = graph.vertices().count();
    if vertex_count != graph.vertex_count() {
        return Err(ConsistencyCheckError::VerticesVertexCountMismatch(
            vertex_count,
            graph.vertex_count(),
        ));
    }

    let edge_count = graph.edges().count();
    if edge_count != graph.edge_count() {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            edge_count,
            graph.edge_count(),
        ));
    }

    let mut out_deg_sum = 0;

    for vertex in graph.vertices() {
        // Unwrap is fine, the vertex comes from the graph itself.
        for edge in graph.edges_from(vertex).unwrap() {
            out_deg_sum += 1;

            if edge.src() != vertex {
                return Err(ConsistencyCheckError::EdgeInWrongBucket(
                    edge.to_string(),
                    vertex.to_string(),
                ));
            }

            if !graph.contains_vertex(edge.dst()) {
                return Err(ConsistencyCheckError::DanglingEdge(edge.to_string()));
            }

            if graph.weight(edge.src(), edge.dst()) != Ok(edge.weight()) {
                return Err(ConsistencyCheckError::EdgeLookupMismatch(edge.to_string()));
            }
        }
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    if out_deg_sum != graph.edge_count() {
        return Err(ConsistencyCheckError::HandshakingLemma(
            out_deg_sum,
            graph.edge_count(),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum QueueOp {
    Insert(u8, u16),
    ChangePriority(u8, u16),
    Remove(u8),
    ExtractTop,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelMismatch {
    #[error("{op:?}: queue returned {actual}, model expected {expected}")]
    Result {
        op: QueueOp,
        actual: String,
        expected: String,
    },
    #[error("queue length ({0}) is not equal to model length ({1})")]
    Length(usize, usize),
}

/// Priority queue checked operation by operation against a naive model that
/// looks up the top entry by a linear scan.
#[derive(Debug)]
pub struct QueueModel {
    queue: PriorityQueue<u8, u16>,
    model: FxHashMap<u8, u16>,
}

impl QueueModel {
    pub fn new(order: Order) -> Self {
        Self {
            queue: PriorityQueue::new(order),
            model: FxHashMap::default(),
        }
    }

    pub fn apply(&mut self, op: QueueOp) -> Result<(), ModelMismatch> {
        fn compare<T: PartialEq + std::fmt::Debug>(
            op: QueueOp,
            actual: T,
            expected: T,
        ) -> Result<(), ModelMismatch> {
            if actual == expected {
                Ok(())
            } else {
                Err(ModelMismatch::Result {
                    op,
                    actual: format!("{actual:?}"),
                    expected: format!("{expected:?}"),
                })
            }
        }

        match op {
            QueueOp::Insert(element, priority) => {
                let expected = !self.model.contains_key(&element);
                if expected {
                    self.model.insert(element, priority);
                }
                compare(op, self.queue.insert(element, priority).is_ok(), expected)?;
            }
            QueueOp::ChangePriority(element, priority) => {
                let expected = self
                    .model
                    .get_mut(&element)
                    .map(|curr| std::mem::replace(curr, priority));
                compare(
                    op,
                    self.queue.change_priority(&element, priority).ok(),
                    expected,
                )?;
            }
            QueueOp::Remove(element) => {
                let expected = self.model.remove(&element);
                compare(op, self.queue.remove(&element), expected)?;
            }
            QueueOp::ExtractTop => {
                let priorities = self.model.values().copied();
                let expected = match self.queue.order() {
                    Order::Min => priorities.min(),
                    Order::Max => priorities.max(),
                };

                let top = self.queue.extract_top();
                compare(op, top.map(|(_, priority)| priority), expected)?;

                // Ties are broken arbitrarily, so the element is taken from
                // whatever the queue returned.
                if let Some((element, priority)) = top {
                    compare(op, self.model.remove(&element), Some(priority))?;
                }
            }
        }

        if self.queue.len() != self.model.len() {
            return Err(ModelMismatch::Length(self.queue.len(), self.model.len()));
        }

        Ok(())
    }

    pub fn apply_all(
        &mut self,
        ops: impl IntoIterator<Item = QueueOp>,
    ) -> Result<(), ModelMismatch> {
        ops.into_iter().try_for_each(|op| self.apply(op))
    }
}

/// Vertex labels `v0`, `v1`, ... used by generated graphs.
pub fn vertex_labels(count: usize) -> impl Iterator<Item = String> {
    (0..count).map(|i| format!("v{i}"))
}
