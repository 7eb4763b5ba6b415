pub mod shortest_path;

pub use shortest_path::{shortest_path, Outcome, PathResult};
