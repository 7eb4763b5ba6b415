//! Human-readable reports.
//!
//! Tables are sorted by vertex so that the output does not depend on the
//! iteration order of the underlying maps.

use std::fmt;

use crate::{
    algo::{Outcome, PathResult},
    core::Graph,
};

/// Lists the vertices and the edges of a graph.
///
/// ```text
/// Vertices: [A, B]
/// Edges:
/// A -> B: 1
/// ```
pub struct GraphSummary<'a, W>(pub &'a Graph<W>);

impl<W: fmt::Display> fmt::Display for GraphSummary<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;

        let mut vertices = graph.vertices().collect::<Vec<_>>();
        vertices.sort_unstable();
        writeln!(f, "Vertices: [{}]", vertices.join(", "))?;

        let mut edges = graph.edges().collect::<Vec<_>>();
        edges.sort_unstable_by(|lhs, rhs| (lhs.src(), lhs.dst()).cmp(&(rhs.src(), rhs.dst())));

        writeln!(f, "Edges:")?;
        for edge in edges {
            writeln!(f, "{} -> {}: {}", edge.src(), edge.dst(), edge.weight())?;
        }

        Ok(())
    }
}

/// The shortest path, its distance and the final distance and predecessor
/// tables.
///
/// Vertices that were not reached show `inf` as the distance and vertices
/// without a predecessor show `none`.
pub struct Report<'a, W>(pub &'a PathResult<W>);

impl<W: fmt::Display> fmt::Display for Report<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        match result.outcome() {
            Outcome::Reached { distance, .. } => {
                // Reached outcome always has a path.
                let path = result.path().unwrap_or_default();
                writeln!(f, "Shortest path is: {}", path.join(" "))?;
                writeln!(f, "Distance is: {distance}")?;
            }
            Outcome::Unreachable => {
                writeln!(f, "No path from {} to {}", result.start(), result.finish())?;
            }
        }

        let mut dist = result.distances().collect::<Vec<_>>();
        dist.sort_unstable_by_key(|(vertex, _)| *vertex);

        writeln!(f)?;
        writeln!(f, "Final dist map:")?;
        for (vertex, dist) in dist {
            match dist {
                Some(dist) => writeln!(f, "{vertex}: {dist}")?,
                None => writeln!(f, "{vertex}: inf")?,
            }
        }

        let mut prev = result.predecessors().collect::<Vec<_>>();
        prev.sort_unstable_by_key(|(vertex, _)| *vertex);

        writeln!(f)?;
        writeln!(f, "Final prev map:")?;
        for (vertex, prev) in prev {
            writeln!(f, "{vertex}: {}", prev.unwrap_or("none"))?;
        }

        Ok(())
    }
}
