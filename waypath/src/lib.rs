//! Weighted directed graphs, an indexed priority queue and Dijkstra's shortest
//! path on top of them.
//!
//! # Examples
//!
//! ```
//! use waypath::{algo::shortest_path, core::Graph};
//!
//! let mut graph = Graph::new();
//!
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v).unwrap();
//! }
//!
//! graph.add_edge("A", "B", 1u32).unwrap();
//! graph.add_edge("A", "C", 4).unwrap();
//! graph.add_edge("B", "C", 2).unwrap();
//! graph.add_edge("B", "D", 5).unwrap();
//! graph.add_edge("C", "D", 1).unwrap();
//!
//! let result = shortest_path(&graph, "A", "D").unwrap();
//!
//! assert_eq!(result.distance(), Some(&4));
//! assert_eq!(result.path(), Some(vec!["A", "B", "C", "D"]));
//! ```

pub mod algo;
pub mod core;
pub mod infra;
pub mod io;
pub mod queue;

pub use crate::{
    algo::{shortest_path, Outcome, PathResult},
    core::{Edge, Graph, Weight},
    queue::{Order, PriorityQueue},
};
