//! Find the [shortest path] between two vertices using [Dijkstra's
//! algorithm].
//!
//! The search starts at the start vertex and repeatedly extracts the vertex
//! with the smallest known distance from a min [priority
//! queue](crate::queue::PriorityQueue), relaxing its outgoing edges. It stops
//! as soon as the finish vertex is extracted, because its distance is final at
//! that point, or when the queue runs out.
//!
//! Edge weights must not be negative. For signed weight types, an edge with a
//! negative weight encountered during the search is reported as
//! [`Error::NegativeWeight`]. Use an unsigned type like `u32` if nonnegative
//! weights can be guaranteed at compile time.
//!
//! [shortest path]: https://en.wikipedia.org/wiki/Shortest_path_problem
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use waypath::{algo::{shortest_path, Outcome}, core::Graph};
//!
//! let mut graph = Graph::new();
//!
//! for city in ["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg", "Florence", "Rome"] {
//!     graph.add_vertex(city).unwrap();
//! }
//!
//! for (u, v, km) in [
//!     ("Prague", "Bratislava", 328u32),
//!     ("Prague", "Nuremberg", 297),
//!     ("Prague", "Vienna", 293),
//!     ("Bratislava", "Vienna", 79),
//!     ("Nuremberg", "Munich", 170),
//!     ("Vienna", "Munich", 402),
//!     ("Vienna", "Florence", 863),
//!     ("Munich", "Florence", 646),
//!     ("Florence", "Rome", 278),
//! ] {
//!     graph.add_undirected_edge(u, v, km).unwrap();
//! }
//!
//! let result = shortest_path(&graph, "Rome", "Prague").unwrap();
//!
//! match result.outcome() {
//!     Outcome::Reached { distance, intermediate } => {
//!         assert_eq!(*distance, 1391);
//!         assert_eq!(intermediate, &["Florence", "Munich", "Nuremberg"]);
//!     }
//!     Outcome::Unreachable => unreachable!(),
//! }
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{error::UnknownVertexError, Graph, Weight};

mod dijkstra;

/// Computes the shortest path from `start` to `finish`.
///
/// Both vertices must exist in the graph. If the finish cannot be reached, the
/// function still succeeds and the [outcome](PathResult::outcome) is
/// [`Outcome::Unreachable`].
pub fn shortest_path<W>(graph: &Graph<W>, start: &str, finish: &str) -> Result<PathResult<W>, Error>
where
    W: Weight,
{
    dijkstra::dijkstra(graph, start, finish)
}

/// Whether the finish vertex was reached, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum Outcome<W> {
    Reached {
        /// Total weight of the shortest path.
        distance: W,
        /// Vertices on the path between the start and the finish, excluding
        /// both of them.
        intermediate: Vec<String>,
    },
    Unreachable,
}

/// The shortest path between two vertices together with the distance and
/// predecessor tables built during the search.
///
/// The tables contain every vertex of the graph. A vertex without a distance
/// was not reached; that is either because it is not connected to the start
/// or because the search terminated at the finish before getting to it. For
/// the same reason, the distance of a vertex other than the start or the
/// finish may be only an upper bound if the search terminated early.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathResult<W> {
    start: String,
    finish: String,
    outcome: Outcome<W>,
    dist: FxHashMap<String, Option<W>>,
    prev: FxHashMap<String, Option<String>>,
}

impl<W> PathResult<W> {
    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn finish(&self) -> &str {
        &self.finish
    }

    pub fn outcome(&self) -> &Outcome<W> {
        &self.outcome
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self.outcome, Outcome::Reached { .. })
    }

    /// Total distance from the start to the finish, or `None` if the finish
    /// is unreachable.
    pub fn distance(&self) -> Option<&W> {
        match self.outcome {
            Outcome::Reached { ref distance, .. } => Some(distance),
            Outcome::Unreachable => None,
        }
    }

    /// Vertices strictly between the start and the finish.
    pub fn intermediate(&self) -> Option<&[String]> {
        match self.outcome {
            Outcome::Reached {
                ref intermediate, ..
            } => Some(intermediate),
            Outcome::Unreachable => None,
        }
    }

    /// The whole path including both the start and the finish. When the start
    /// and the finish are the same vertex, it appears only once.
    pub fn path(&self) -> Option<Vec<&str>> {
        let intermediate = self.intermediate()?;
        let mut path = Vec::with_capacity(intermediate.len() + 2);

        path.push(self.start.as_str());
        path.extend(intermediate.iter().map(String::as_str));
        if self.finish != self.start {
            path.push(self.finish.as_str());
        }

        Some(path)
    }

    /// Distance of the vertex from the start, or `None` if it was not reached
    /// or it is not in the graph.
    pub fn dist(&self, vertex: &str) -> Option<&W> {
        self.dist.get(vertex)?.as_ref()
    }

    /// Predecessor of the vertex on the best path found, or `None` for the
    /// start, for vertices not reached and for vertices not in the graph.
    pub fn prev(&self, vertex: &str) -> Option<&str> {
        self.prev.get(vertex)?.as_deref()
    }

    /// Iterates over the distance table in unspecified order.
    pub fn distances(&self) -> impl Iterator<Item = (&str, Option<&W>)> + '_ {
        self.dist
            .iter()
            .map(|(vertex, dist)| (vertex.as_str(), dist.as_ref()))
    }

    /// Iterates over the predecessor table in unspecified order.
    pub fn predecessors(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.prev
            .iter()
            .map(|(vertex, prev)| (vertex.as_str(), prev.as_deref()))
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the start, in this order, following the predecessor table.
    ///
    /// The given vertex itself is not included and the start is the last item,
    /// unless the vertex was not reached.
    pub fn reconstruct<'a>(&'a self, to: &'a str) -> PathReconstruction<'a> {
        PathReconstruction {
            curr: to,
            prev: &self.prev,
        }
    }
}

/// The error encountered during a [`shortest_path`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The start or the finish is not in the graph.
    #[error(transparent)]
    UnknownVertex(#[from] UnknownVertexError),

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered: {src} -> {dst}")]
    NegativeWeight { src: String, dst: String },

    /// The finish was not reached, and at least one path was cut off because
    /// its distance does not fit into the weight type. The edge is the first
    /// one whose relaxation overflowed.
    #[error("distance overflow when following edge {src} -> {dst}")]
    DistanceOverflow { src: String, dst: String },
}

/// Iterator over the vertices on the path from a vertex to the start vertex.
///
/// Returned by [`PathResult::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: &'a str,
    prev: &'a FxHashMap<String, Option<String>>,
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.prev.get(self.curr)?.as_deref()?;
        Some(self.curr)
    }
}
