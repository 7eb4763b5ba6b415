#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use waypath::{core::Graph, infra::testing::vertex_labels};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generator of pairs `(w, v)` with `w < v`, each present with probability `p`
/// independently of the others.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, n, p } = self;

        if *v >= *n {
            return None;
        }

        // Skip over the pairs not present by sampling the geometric
        // distribution.
        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - *p).log10()).floor() as usize;

        while *w >= *v && *v < *n {
            *w -= *v;
            *v += 1;
        }

        if *v < *n { Some((*w, *v)) } else { None }
    }
}

/// Random directed graph with edges going from lower to higher labels, so that
/// `v0` tends to reach everything.
pub fn waypath_random(vertex_count: usize, density: f32, rng: &mut Rng) -> Graph<u32> {
    let labels = vertex_labels(vertex_count).collect::<Vec<_>>();
    let mut graph = Graph::new();

    for label in &labels {
        graph.add_vertex(label.as_str()).unwrap();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&labels[u], &labels[v], rng.u32(1..100)).unwrap();
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), u32, petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.u32(1..100));
    }

    graph
}
