#![no_main]

use libfuzzer_sys::fuzz_target;

use waypath::{
    core::Graph,
    infra::{arbitrary::GraphOpsSeq, testing::check_consistency},
};

fuzz_target!(|ops: GraphOpsSeq<i8>| {
    let mut graph = Graph::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
