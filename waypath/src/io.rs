//! Text input and output around the core: the line-oriented graph format,
//! human-readable reports and Graphviz export.

pub mod export;
pub mod loader;
pub mod render;

pub use export::Dot;
pub use loader::{load_file, load_str, Document, GraphKind, LoadError, Query};
