use std::fmt;

use rustc_hash::FxHashMap;

use super::{
    edge::Edge,
    error::{
        AddEdgeError, DuplicateEdgeError, DuplicateVertexError, Endpoint, UnknownEdgeError,
        UnknownVertexError,
    },
};

/// Directed weighted graph with string-labeled vertices.
///
/// Every vertex owns a bucket of its outgoing edges keyed by the destination
/// vertex, so there is at most one edge for each ordered pair of vertices.
/// Vertices and edges can only be added, never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<W> {
    adj: FxHashMap<String, FxHashMap<String, Edge<W>>>,
    edge_count: usize,
}

impl<W> Graph<W> {
    pub fn new() -> Self {
        Self {
            adj: FxHashMap::default(),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adj.contains_key(vertex)
    }

    pub fn contains_edge(&self, src: &str, dst: &str) -> bool {
        self.edge(src, dst).is_some()
    }

    /// Adds a new vertex without any edges.
    ///
    /// Fails if the vertex already exists, in which case the graph is left
    /// untouched.
    pub fn add_vertex(&mut self, vertex: impl Into<String>) -> Result<(), DuplicateVertexError> {
        let vertex = vertex.into();

        if self.adj.contains_key(&vertex) {
            return Err(DuplicateVertexError(vertex));
        }

        self.adj.insert(vertex, FxHashMap::default());
        Ok(())
    }

    /// Adds a directed edge from `src` to `dst`.
    ///
    /// Both vertices must exist and there must not be an edge from `src` to
    /// `dst` yet. The weight is stored as is.
    pub fn add_edge(&mut self, src: &str, dst: &str, weight: W) -> Result<(), AddEdgeError> {
        self.check_new_edge(src, dst)?;
        self.insert_edge(src, dst, weight);
        Ok(())
    }

    /// Adds edges in both directions between `u` and `v`.
    ///
    /// Either both edges are added or none of them. A self-loop counts as a
    /// duplicate of itself and is rejected.
    pub fn add_undirected_edge(&mut self, u: &str, v: &str, weight: W) -> Result<(), AddEdgeError>
    where
        W: Clone,
    {
        self.check_new_edge(u, v)?;

        if u == v {
            return Err(DuplicateEdgeError {
                src: v.to_string(),
                dst: u.to_string(),
            }
            .into());
        }

        self.check_new_edge(v, u)?;

        self.insert_edge(u, v, weight.clone());
        self.insert_edge(v, u, weight);
        Ok(())
    }

    /// Iterates over all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.adj.keys().map(String::as_str)
    }

    /// Iterates over all edges in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adj.values().flat_map(|bucket| bucket.values())
    }

    /// Iterates over the edges leaving `vertex`.
    pub fn edges_from(
        &self,
        vertex: &str,
    ) -> Result<impl Iterator<Item = &Edge<W>> + '_, UnknownVertexError> {
        self.bucket(vertex).map(|bucket| bucket.values())
    }

    /// Iterates over the vertices reachable by a single edge from `vertex`.
    pub fn adjacent_to(
        &self,
        vertex: &str,
    ) -> Result<impl Iterator<Item = &str> + '_, UnknownVertexError> {
        self.bucket(vertex)
            .map(|bucket| bucket.keys().map(String::as_str))
    }

    pub fn edge(&self, src: &str, dst: &str) -> Option<&Edge<W>> {
        self.adj.get(src)?.get(dst)
    }

    pub fn weight(&self, src: &str, dst: &str) -> Result<&W, UnknownEdgeError> {
        self.edge(src, dst)
            .map(Edge::weight)
            .ok_or_else(|| UnknownEdgeError {
                src: src.to_string(),
                dst: dst.to_string(),
            })
    }

    fn bucket(&self, vertex: &str) -> Result<&FxHashMap<String, Edge<W>>, UnknownVertexError> {
        self.adj
            .get(vertex)
            .ok_or_else(|| UnknownVertexError::new(vertex))
    }

    fn check_new_edge(&self, src: &str, dst: &str) -> Result<(), AddEdgeError> {
        let bucket = self
            .adj
            .get(src)
            .ok_or_else(|| UnknownVertexError::endpoint(src, Endpoint::Source))?;

        if !self.adj.contains_key(dst) {
            return Err(UnknownVertexError::endpoint(dst, Endpoint::Destination).into());
        }

        if bucket.contains_key(dst) {
            return Err(DuplicateEdgeError {
                src: src.to_string(),
                dst: dst.to_string(),
            }
            .into());
        }

        Ok(())
    }

    // The caller checks that the edge can be added.
    fn insert_edge(&mut self, src: &str, dst: &str, weight: W) {
        if let Some(bucket) = self.adj.get_mut(src) {
            bucket.insert(dst.to_string(), Edge::new(src, dst, weight));
            self.edge_count += 1;
        }
    }
}

impl<W> Default for Graph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: fmt::Display> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices = self.vertices().collect::<Vec<_>>();
        vertices.sort_unstable();

        let mut edges = self.edges().collect::<Vec<_>>();
        edges.sort_unstable_by(|lhs, rhs| (lhs.src(), lhs.dst()).cmp(&(rhs.src(), rhs.dst())));

        write!(f, "Graph{{vertices=[{}], edges=[", vertices.join(", "))?;
        for (i, edge) in edges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{edge}")?;
        }
        f.write_str("]}")
    }
}
