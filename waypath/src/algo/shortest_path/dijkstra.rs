use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{
    core::{error::UnknownVertexError, Graph, Weight},
    queue::{ElementNotFoundError, Order, PriorityQueue},
};

use super::{Error, Outcome, PathResult};

pub fn dijkstra<W>(graph: &Graph<W>, start: &str, finish: &str) -> Result<PathResult<W>, Error>
where
    W: Weight,
{
    for vertex in [start, finish] {
        if !graph.contains_vertex(vertex) {
            return Err(UnknownVertexError::new(vertex).into());
        }
    }

    let mut dist: FxHashMap<String, Option<W>> = graph
        .vertices()
        .map(|vertex| (vertex.to_string(), None))
        .collect();
    let mut prev: FxHashMap<String, Option<String>> = graph
        .vertices()
        .map(|vertex| (vertex.to_string(), None))
        .collect();
    let mut queue = PriorityQueue::with_capacity(Order::Min, graph.vertex_count());

    dist.insert(start.to_string(), Some(W::zero()));
    // The queue is empty, so the insertion cannot be rejected.
    let _ = queue.insert(start.to_string(), W::zero());

    let mut visited = 0usize;
    let mut overflow = None;

    while let Some((vertex, vertex_dist)) = queue.extract_top() {
        debug!(vertex = %vertex, dist = %vertex_dist, "visiting vertex");
        visited += 1;

        // All weights are non-negative, so no vertex still in the queue can
        // offer a shorter path to the finish.
        if vertex == finish {
            break;
        }

        for edge in graph.edges_from(&vertex)? {
            let next = edge.dst();
            let weight = *edge.weight();

            // For unsigned types this is a constant false and the comparison
            // is optimized away.
            if !W::is_unsigned() && weight < W::zero() {
                return Err(Error::NegativeWeight {
                    src: vertex.clone(),
                    dst: next.to_string(),
                });
            }

            // A sum that does not fit is longer than any distance the type
            // can hold, so it can never win the relaxation.
            let Some(next_dist) = vertex_dist.checked_add(weight) else {
                trace!(src = %vertex, dst = %next, "skipping overflowing edge");
                overflow.get_or_insert_with(|| (vertex.clone(), next.to_string()));
                continue;
            };

            let Some(curr_dist) = dist.get_mut(next) else {
                continue;
            };

            // Relaxation operation. If the distance is better than what we had
            // so far, update it.
            if curr_dist.map_or(true, |curr_dist| next_dist < curr_dist) {
                trace!(vertex = %next, from = ?curr_dist, to = %next_dist, "updating dist");

                *curr_dist = Some(next_dist);
                if let Some(pred) = prev.get_mut(next) {
                    *pred = Some(vertex.clone());
                }

                let queued = match queue.change_priority(next, next_dist) {
                    Ok(_) => Ok(()),
                    Err(ElementNotFoundError(next_dist)) => {
                        queue.insert(next.to_string(), next_dist)
                    }
                };
                debug_assert!(queued.is_ok());
            }
        }
    }

    let outcome = match (dist.get(finish).copied().flatten(), overflow) {
        (Some(distance), _) => Outcome::Reached {
            distance,
            intermediate: intermediate_vertices(&prev, finish),
        },
        // The finish may be reachable, only not within the range of the type.
        (None, Some((src, dst))) => return Err(Error::DistanceOverflow { src, dst }),
        (None, None) => Outcome::Unreachable,
    };

    debug!(
        start,
        finish,
        visited,
        reachable = matches!(outcome, Outcome::Reached { .. }),
        "shortest path search finished"
    );

    Ok(PathResult {
        start: start.to_string(),
        finish: finish.to_string(),
        outcome,
        dist,
        prev,
    })
}

// Vertices strictly between the start and the finish, in the start to finish
// order. The start is the only reached vertex without a predecessor.
fn intermediate_vertices(prev: &FxHashMap<String, Option<String>>, finish: &str) -> Vec<String> {
    let mut path = Vec::new();
    let mut curr = prev.get(finish).cloned().flatten();

    while let Some(vertex) = curr {
        curr = prev.get(&vertex).cloned().flatten();
        if curr.is_some() {
            path.push(vertex);
        }
    }

    path.reverse();
    path
}
