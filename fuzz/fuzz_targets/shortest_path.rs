#![no_main]

use libfuzzer_sys::fuzz_target;

use waypath::{
    algo::shortest_path,
    core::Graph,
    infra::{
        arbitrary::GraphOpsSeq,
        testing::{bellman_ford, path_weight},
    },
};

fuzz_target!(|ops: GraphOpsSeq<u8>| {
    let mut small = Graph::new();
    for op in ops {
        op.apply(&mut small);
    }

    // Widen the weights so that no path sum overflows.
    let mut graph = Graph::<u32>::new();
    for vertex in small.vertices() {
        graph.add_vertex(vertex).unwrap();
    }
    for edge in small.edges() {
        graph
            .add_edge(edge.src(), edge.dst(), u32::from(*edge.weight()))
            .unwrap();
    }

    let mut vertices = graph.vertices().collect::<Vec<_>>();
    vertices.sort_unstable();

    let (Some(&start), Some(&finish)) = (vertices.first(), vertices.last()) else {
        return;
    };

    let result = shortest_path(&graph, start, finish).unwrap();
    let expected = bellman_ford(&graph, start);

    assert_eq!(result.distance(), expected.get(finish));

    if let Some(path) = result.path() {
        assert_eq!(path_weight(&graph, &path).as_ref(), result.distance());
    }
});
