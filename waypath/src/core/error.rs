use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot add duplicate vertex to graph: {0}")]
pub struct DuplicateVertexError(pub String);

/// Which endpoint of an edge refers to a vertex that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Source => "source",
            Endpoint::Destination => "destination",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", display_unknown_vertex(.vertex, .endpoint))]
pub struct UnknownVertexError {
    pub vertex: String,
    /// Set when the vertex was referenced as an endpoint of a new edge.
    pub endpoint: Option<Endpoint>,
}

impl UnknownVertexError {
    pub fn new(vertex: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            endpoint: None,
        }
    }

    pub fn endpoint(vertex: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            vertex: vertex.into(),
            endpoint: Some(endpoint),
        }
    }
}

fn display_unknown_vertex(vertex: &str, endpoint: &Option<Endpoint>) -> String {
    match endpoint {
        Some(endpoint) => format!("{endpoint} vertex does not exist: {vertex}"),
        None => format!("vertex does not exist: {vertex}"),
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot add duplicate edge {src} -> {dst} to graph")]
pub struct DuplicateEdgeError {
    pub src: String,
    pub dst: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("edge does not exist: {src} -> {dst}")]
pub struct UnknownEdgeError {
    pub src: String,
    pub dst: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddEdgeError {
    #[error("adding edge failed: {0}")]
    UnknownVertex(#[from] UnknownVertexError),
    #[error("adding edge failed: {0}")]
    Duplicate(#[from] DuplicateEdgeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DuplicateVertexError("A".to_string()).to_string(),
            "cannot add duplicate vertex to graph: A"
        );
        assert_eq!(
            UnknownVertexError::new("X").to_string(),
            "vertex does not exist: X"
        );
        assert_eq!(
            AddEdgeError::from(UnknownVertexError::endpoint("X", Endpoint::Destination))
                .to_string(),
            "adding edge failed: destination vertex does not exist: X"
        );
    }
}
