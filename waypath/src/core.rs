pub mod edge;
pub mod error;
pub mod graph;
pub mod weight;

pub use edge::Edge;
pub use graph::Graph;
pub use weight::Weight;
