use proptest::{collection::vec, prelude::*};

use crate::core::Graph;

use super::testing::{vertex_labels, QueueOp};

/// Sequences of up to `max_len` queue operations over elements in
/// `0..elements`.
///
/// Priorities are drawn from a small range so that ties are common.
pub fn queue_ops(elements: u8, max_len: usize) -> impl Strategy<Value = Vec<QueueOp>> {
    let element = 0..elements.max(1);
    let priority = 0..64u16;

    let op = prop_oneof![
        3 => (element.clone(), priority.clone()).prop_map(|(e, p)| QueueOp::Insert(e, p)),
        3 => (element.clone(), priority).prop_map(|(e, p)| QueueOp::ChangePriority(e, p)),
        1 => element.prop_map(QueueOp::Remove),
        2 => Just(QueueOp::ExtractTop),
    ];

    vec(op, 0..=max_len)
}

fn edge_list(
    max_vertices: usize,
    max_weight: u32,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1..=max_vertices.max(1)).prop_flat_map(move |n| {
        let edges = vec((0..n, 0..n, 0..=max_weight), 0..=(n * n / 2).max(1));
        (Just(n), edges)
    })
}

fn build_graph<F>(n: usize, edges: Vec<(usize, usize, u32)>, mut add: F) -> Graph<u32>
where
    F: FnMut(&mut Graph<u32>, &str, &str, u32),
{
    let mut graph = Graph::new();
    let labels = vertex_labels(n).collect::<Vec<_>>();

    for label in &labels {
        // Labels are distinct.
        let _ = graph.add_vertex(label.as_str());
    }

    for (u, v, weight) in edges {
        add(&mut graph, &labels[u], &labels[v], weight);
    }

    graph
}

/// Directed graphs with vertices `v0` to `v{n-1}`, `n <= max_vertices`, and
/// weights in `0..=max_weight`. Self-loops may appear.
pub fn graph_directed(max_vertices: usize, max_weight: u32) -> impl Strategy<Value = Graph<u32>> {
    edge_list(max_vertices, max_weight).prop_map(|(n, edges)| {
        build_graph(n, edges, |graph, u, v, weight| {
            // Repeated pairs are generated occasionally, the first one wins.
            let _ = graph.add_edge(u, v, weight);
        })
    })
}

/// Like [`graph_directed`], but every edge is added in both directions.
pub fn graph_undirected(
    max_vertices: usize,
    max_weight: u32,
) -> impl Strategy<Value = Graph<u32>> {
    edge_list(max_vertices, max_weight).prop_map(|(n, edges)| {
        build_graph(n, edges, |graph, u, v, weight| {
            let _ = graph.add_undirected_edge(u, v, weight);
        })
    })
}
