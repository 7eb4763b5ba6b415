use std::fmt;

/// Directed weighted edge from [`src`](Edge::src) to [`dst`](Edge::dst).
///
/// Edges are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge<W> {
    src: String,
    dst: String,
    weight: W,
}

impl<W> Edge<W> {
    pub(crate) fn new(src: impl Into<String>, dst: impl Into<String>, weight: W) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            weight,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn dst(&self) -> &str {
        &self.dst
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.src, self.dst, self.weight)
    }
}
